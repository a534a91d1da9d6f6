use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::signal::Signal;

/// A signal viewed through time: the original plus its age-eroded confidence.
///
/// Derived per call against an explicit "now"; the wrapped signal is untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DecayedSignal {
    pub signal: Signal,
    pub age_in_days: u32,
    pub decayed_confidence: f64,
    pub is_aged_out: bool,
}

/// Each input and intermediate value of a decay calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DecayBreakdown {
    pub original_confidence: f64,
    /// Continuous age in fractional days; 0.0 under clock skew.
    pub age_days: f64,
    pub half_life_days: f64,
    /// `0.5^(age / half_life)`, or 1.0 when no time has passed.
    pub decay_factor: f64,
    pub final_confidence: f64,
}
