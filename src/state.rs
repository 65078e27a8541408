use std::path::{Path, PathBuf};

use crate::data::model::{Dataset, Summary};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// What the viewer shows. Built once before the window opens, never mutated.
pub struct AppState {
    /// File the capture was read from.
    pub source: PathBuf,

    /// Loaded readings.
    pub dataset: Dataset,

    /// Cached figures for the status bar.
    pub summary: Summary,
}

impl AppState {
    pub fn new(source: &Path, dataset: Dataset) -> Self {
        let summary = dataset.summary();
        log::debug!("summary for {}: {summary:?}", source.display());

        Self {
            source: source.to_path_buf(),
            dataset,
            summary,
        }
    }

    /// File name for display, falling back to the full path.
    pub fn source_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }

    /// One-line description for the status bar.
    pub fn status_line(&self) -> String {
        let s = &self.summary;
        let mut parts = vec![format!("{} readings", s.count)];
        if let Some((lo, hi)) = s.angle_range {
            parts.push(format!("angle {lo}..{hi}"));
        }
        if let Some((lo, hi)) = s.depth_range {
            parts.push(format!("depth {lo}..{hi}"));
        }
        parts.push(format!("{} reversals", s.reversals));
        parts.join(", ")
    }
}
