use serde::{Deserialize, Serialize};
use std::fmt;

/// A score as the backend reports it: either a 0–1 ratio or a 0–100
/// percentage, with no marker saying which.
///
/// Every consumer goes through `as_ratio`/`as_percent` exactly once at the
/// data boundary; the shared rule is that a raw value above 1.0 is already
/// a percentage.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    /// Wrap a raw backend score. Negative and non-finite values clamp to 0.
    pub fn new(raw: f64) -> Self {
        if raw.is_finite() && raw > 0.0 {
            Self(raw)
        } else {
            Self(0.0)
        }
    }

    /// The raw value as received.
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Normalize to a 0–1 ratio.
    pub fn as_ratio(self) -> f64 {
        if self.0 > 1.0 {
            (self.0 / 100.0).clamp(0.0, 1.0)
        } else {
            self.0
        }
    }

    /// Normalize to a 0–100 percentage.
    pub fn as_percent(self) -> f64 {
        if self.0 > 1.0 {
            self.0.clamp(0.0, 100.0)
        } else {
            self.0 * 100.0
        }
    }
}

impl Default for Score {
    fn default() -> Self {
        Self(0.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.as_percent())
    }
}

impl From<f64> for Score {
    fn from(raw: f64) -> Self {
        Self::new(raw)
    }
}

impl From<Score> for f64 {
    fn from(s: Score) -> Self {
        s.0
    }
}
