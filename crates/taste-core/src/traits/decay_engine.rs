use chrono::{DateTime, Utc};

use crate::errors::TasteResult;
use crate::models::{DecayedSignal, ReprofilingAssessment, ReprofilingInput};
use crate::signal::Signal;

/// Time-based confidence erosion and staleness evaluation.
pub trait IDecayEngine: Send + Sync {
    /// Decay one signal relative to `now`.
    /// The decayed confidence is in [0.0, original].
    fn decay(&self, signal: &Signal, now: DateTime<Utc>) -> TasteResult<DecayedSignal>;

    /// Decide whether a user's profile should be re-extracted.
    fn check_reprofiling(&self, input: &ReprofilingInput) -> TasteResult<ReprofilingAssessment>;
}
