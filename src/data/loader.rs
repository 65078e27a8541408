use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use thiserror::Error;

use super::model::{Dataset, Reading};

/// Field names, in file order. The scanner writes them as its first line.
pub const FIELD_NAMES: [&str; 4] = ["index", "depth_value", "angle", "direction"];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: expected 4 fields, found {found}")]
    FieldCount { line: u64, found: usize },
    #[error("line {line}: not four numeric fields")]
    Parse {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

impl LoadError {
    /// Line of the offending record, if the error is tied to one.
    pub fn line(&self) -> Option<u64> {
        match self {
            LoadError::Io { .. } => None,
            LoadError::FieldCount { line, .. } | LoadError::Parse { line, .. } => Some(*line),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a scanner capture from a file.
///
/// Layout: comma separated, no header, four numeric fields per row read as
/// `index, depth_value, angle, direction`. A leading line equal to
/// [`FIELD_NAMES`] is tolerated since the scanner firmware emits one.
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_reader(file)
}

/// Same as [`load_file`] for any byte source.
pub fn load_reader<R: Read>(rdr: R) -> Result<Dataset, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(rdr);

    let mut readings = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let fallback_line = row_no as u64 + 1;
        let record = result.map_err(|source| LoadError::Parse {
            line: source.position().map_or(fallback_line, |p| p.line()),
            source,
        })?;

        if row_no == 0 && is_header(&record) {
            log::debug!("skipping header line");
            continue;
        }

        let line = record.position().map_or(fallback_line, |p| p.line());
        if record.len() != FIELD_NAMES.len() {
            return Err(LoadError::FieldCount {
                line,
                found: record.len(),
            });
        }

        let reading: Reading = record
            .deserialize(None)
            .map_err(|source| LoadError::Parse { line, source })?;
        readings.push(reading);
    }

    Ok(Dataset::from_readings(readings))
}

fn is_header(record: &csv::StringRecord) -> bool {
    record.iter().eq(FIELD_NAMES.iter().copied())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rstest::rstest;

    use super::*;

    const SAMPLE: &str = "0,1.5,10,1\n1,2.0,20,1\n2,1.8,30,-1\n";

    #[test]
    fn test_load_sample() {
        let ds = load_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(
            ds.readings,
            vec![
                Reading { index: 0.0, depth_value: 1.5, angle: 10.0, direction: 1.0 },
                Reading { index: 1.0, depth_value: 2.0, angle: 20.0, direction: 1.0 },
                Reading { index: 2.0, depth_value: 1.8, angle: 30.0, direction: -1.0 },
            ]
        );
        assert_eq!(ds.angles(), vec![10.0, 20.0, 30.0]);
        assert_eq!(ds.depth_values(), vec![1.5, 2.0, 1.8]);
    }

    #[test]
    fn test_load_file_twice_is_identical() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let first = load_file(file.path()).unwrap();
        let second = load_file(file.path()).unwrap();
        assert_eq!(first.points(), second.points());
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("linear_scanner.csv");

        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_firmware_header_skipped() {
        let text = "index,depth_value,angle,direction\n0,812,-29,0\n1,815,-28,0";
        let ds = load_reader(text.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.readings[0].depth_value, 812.0);
        assert_eq!(ds.readings[1].angle, -28.0);
    }

    #[test]
    fn test_whitespace_and_blank_lines() {
        let text = " 0 , 1.5 , 10 , 1 \n\n1,2.0,20,1\n";
        let ds = load_reader(text.as_bytes()).unwrap();
        assert_eq!(ds.points(), vec![[10.0, 1.5], [20.0, 2.0]]);
    }

    #[test]
    fn test_empty_input() {
        let ds = load_reader("".as_bytes()).unwrap();
        assert!(ds.is_empty());
    }

    #[rstest]
    #[case("0,1.5,10,1\n1,2.0,20\n", 2, 3)]
    #[case("0,1.5,10,1\n1,2.0,20,1,9\n", 2, 5)]
    #[case("index,depth_value,angle,direction\n0,1,2\n", 2, 3)]
    #[case("0,1.5,10\n", 1, 3)]
    #[case("0,1.5,10,1,7\n", 1, 5)]
    fn test_wrong_field_count(
        #[case] text: &str,
        #[case] expected_line: u64,
        #[case] expected_found: usize,
    ) {
        match load_reader(text.as_bytes()) {
            Err(LoadError::FieldCount { line, found }) => {
                assert_eq!(line, expected_line);
                assert_eq!(found, expected_found);
            }
            other => panic!("expected a field count error, got {other:?}"),
        }
    }

    #[rstest]
    #[case("1,abc,30,1\n", 1)]
    #[case("0,1.5,10,1\n1,abc,30,1\n", 2)]
    #[case("0,,10,1\n", 1)]
    #[case("0,1.5,10,1\nindex,depth_value,angle,direction\n", 2)]
    fn test_non_numeric_rows(#[case] text: &str, #[case] expected_line: u64) {
        let err = load_reader(text.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }), "got {err:?}");
        assert_eq!(err.line(), Some(expected_line));
    }
}
