//! Strokes-gained data model and wire format.

use serde::{Deserialize, Serialize};

/// One time-windowed strokes-gained bundle, in strokes per round relative to
/// the field. Values may be negative.
///
/// `total` accepts the `total_sg` spelling used by the original mock
/// dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokesGained {
    #[serde(alias = "total_sg")]
    pub total: f64,
    pub off_the_tee: f64,
    pub approach: f64,
    pub around_the_green: f64,
    pub putting: f64,
}

impl StrokesGained {
    pub fn flat(total: f64) -> Self {
        Self {
            total,
            off_the_tee: 0.0,
            approach: 0.0,
            around_the_green: 0.0,
            putting: 0.0,
        }
    }

    /// Metric name/value pairs, `total` excluded.
    pub fn by_category(&self) -> [(&'static str, f64); 4] {
        [
            ("off_the_tee", self.off_the_tee),
            ("approach", self.approach),
            ("around_the_green", self.around_the_green),
            ("putting", self.putting),
        ]
    }
}

/// Both statistic windows for one player. Immutable once fetched.
///
/// The wire keys are `"2-year"` and `"3-month"`, matching the lookup
/// endpoint's response shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    #[serde(rename = "2-year")]
    pub baseline: StrokesGained,
    #[serde(rename = "3-month")]
    pub recent: StrokesGained,
}
