use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use taste_core::models::{DecayedSignal, ReprofilingAssessment, TrajectoryAnalysis};
use taste_core::Domain;

/// Everything known about a user's profile health at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileAssessment {
    /// Every history signal with its decayed confidence, in input order.
    pub decayed: Vec<DecayedSignal>,
    /// Mean decayed confidence per domain with any history.
    pub domain_confidence: BTreeMap<Domain, f64>,
    pub reprofiling: ReprofilingAssessment,
    pub trajectory: TrajectoryAnalysis,
}

impl ProfileAssessment {
    /// Signals still above the aged-out floor.
    pub fn active_count(&self) -> usize {
        self.decayed.iter().filter(|d| !d.is_aged_out).count()
    }

    pub fn aged_out_count(&self) -> usize {
        self.decayed.len() - self.active_count()
    }
}
