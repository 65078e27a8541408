use serde::Deserialize;

// ---------------------------------------------------------------------------
// Reading – one row of the scanner capture
// ---------------------------------------------------------------------------

/// A single scanner sample. Fields are positional in the CSV file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Reading {
    /// Sample counter written by the scanner.
    pub index: f64,
    /// Raw depth at the centre pixel.
    pub depth_value: f64,
    /// Tilt angle in degrees.
    pub angle: f64,
    /// Sweep direction flag.
    pub direction: f64,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded capture
// ---------------------------------------------------------------------------

/// All readings of a capture, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub readings: Vec<Reading>,
}

/// Aggregate figures shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    /// `(min, max)` of the angle column, `None` when empty.
    pub angle_range: Option<(f64, f64)>,
    /// `(min, max)` of the depth column, `None` when empty.
    pub depth_range: Option<(f64, f64)>,
    /// Number of times `direction` changes between consecutive readings.
    pub reversals: usize,
}

impl Dataset {
    pub fn from_readings(readings: Vec<Reading>) -> Self {
        Dataset { readings }
    }

    /// Number of readings.
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Angle column in file order.
    pub fn angles(&self) -> Vec<f64> {
        self.readings.iter().map(|r| r.angle).collect()
    }

    /// Depth column in file order.
    pub fn depth_values(&self) -> Vec<f64> {
        self.readings.iter().map(|r| r.depth_value).collect()
    }

    /// `[angle, depth_value]` pairs in file order, ready for plotting.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.readings
            .iter()
            .map(|r| [r.angle, r.depth_value])
            .collect()
    }

    pub fn summary(&self) -> Summary {
        let reversals = self
            .readings
            .windows(2)
            .filter(|w| w[0].direction != w[1].direction)
            .count();

        Summary {
            count: self.len(),
            angle_range: min_max(self.angles()),
            depth_range: min_max(self.depth_values()),
            reversals,
        }
    }
}

fn min_max(values: Vec<f64>) -> Option<(f64, f64)> {
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
