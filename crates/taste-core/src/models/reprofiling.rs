//! Reprofiling trigger inputs and verdicts.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::signal::Domain;

/// Everything the trigger rules look at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReprofilingInput {
    /// When the taste profile was last synthesized; `None` for cold-start users.
    pub last_synthesized_at: Option<DateTime<Utc>>,
    /// Behavioral events (saves, bookings, dismissals) since that synthesis.
    pub new_behavioral_events: u32,
    /// Decayed average confidence per domain.
    pub domain_confidence: BTreeMap<Domain, f64>,
    /// Fraction of extracted signals that conflicted with earlier ones.
    pub contradiction_ratio: f64,
    pub now: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ReprofilingUrgency {
    Low,
    Medium,
    High,
}

/// A conversation phase the caller should run when reprofiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ReprofilingPhase {
    FullOnboarding,
    FullRefresh,
    BehavioralUpdate,
    /// Targeted questions for one weak domain.
    Adaptive(Domain),
    ContradictionResolution,
}

impl fmt::Display for ReprofilingPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FullOnboarding => f.write_str("full_onboarding"),
            Self::FullRefresh => f.write_str("full_refresh"),
            Self::BehavioralUpdate => f.write_str("behavioral_update"),
            Self::Adaptive(domain) => write!(f, "adaptive_{}", domain.as_str().to_lowercase()),
            Self::ContradictionResolution => f.write_str("contradiction_resolution"),
        }
    }
}

/// Whether, how urgently, and how to re-run taste extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReprofilingAssessment {
    pub should_reprofile: bool,
    pub urgency: ReprofilingUrgency,
    pub triggers: Vec<String>,
    pub suggested_phases: Vec<ReprofilingPhase>,
}
