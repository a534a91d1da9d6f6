use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use ts_rs::TS;

/// Confidence score clamped to [0.0, 1.0].
/// Represents how sure the extractor was about a taste observation.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, TS)]
#[ts(export)]
pub struct Confidence(f64);

impl Confidence {
    /// Create a new Confidence, clamping to [0.0, 1.0]. NaN becomes 0.0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(1.0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}

// Deserialization goes through `new` so persisted out-of-range values are clamped.
impl<'de> Deserialize<'de> for Confidence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Self::new)
    }
}
