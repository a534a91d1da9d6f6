//! Place match results: per-domain scores plus the profile-weighted overall.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::signal::Domain;

/// Per-domain 0–100 scores for a single place, plus the weighted overall score.
///
/// Built fresh on every scoring call and replaced, never patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainBreakdown {
    pub domains: BTreeMap<Domain, u8>,
    pub overall: u8,
}

impl DomainBreakdown {
    /// Score for a domain, if the breakdown covers it.
    pub fn score(&self, domain: Domain) -> Option<u8> {
        self.domains.get(&domain).copied()
    }
}

/// How a single domain score was reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainScoreDetail {
    pub domain: Domain,
    pub signal_count: usize,
    pub anti_signal_count: usize,
    /// Mean effective confidence (corroboration applied). 0.0 without signals.
    pub avg_confidence: f64,
    /// Coverage term in [0, 1]. 0.0 without signals.
    pub density: f64,
    /// Score before anti-signal penalties.
    pub base_score: u8,
    /// Total points removed by anti-signals.
    pub penalty: u32,
    pub final_score: u8,
}

/// Breakdown with its per-domain audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoredPlace {
    pub breakdown: DomainBreakdown,
    pub details: Vec<DomainScoreDetail>,
    /// Input signals and anti-signals whose dimension had no domain mapping.
    pub dropped: usize,
}
