//! Trajectory analysis results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::constants::{PATTERN_DORMANT, PATTERN_NONE};
use crate::signal::Domain;

/// The direction a user's taste is moving in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrajectoryDirection {
    Stable,
    Refining,
    Expanding,
    Shifting,
}

impl TrajectoryDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stable => "STABLE",
            Self::Refining => "REFINING",
            Self::Expanding => "EXPANDING",
            Self::Shifting => "SHIFTING",
        }
    }
}

impl fmt::Display for TrajectoryDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate change in one domain's dominant pattern.
///
/// The engine returns these; storing them (append-only) is the caller's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrajectoryShift {
    pub domain: Domain,
    pub from_pattern: String,
    pub to_pattern: String,
    pub detected_at: DateTime<Utc>,
}

impl TrajectoryShift {
    /// The domain had no history and appeared in the recent window.
    pub fn is_emerging(&self) -> bool {
        self.from_pattern == PATTERN_NONE
    }

    /// The domain went quiet in the recent window.
    pub fn is_dormant(&self) -> bool {
        self.to_pattern == PATTERN_DORMANT
    }
}

/// Full result of comparing a recent window against a historical one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrajectoryAnalysis {
    pub direction: TrajectoryDirection,
    pub shifts: Vec<TrajectoryShift>,
    pub description: String,
    /// Trust in the classification itself, in [0, 1].
    pub confidence: f64,
}
