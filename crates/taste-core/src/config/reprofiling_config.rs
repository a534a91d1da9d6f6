use serde::{Deserialize, Serialize};

use super::defaults;

/// Thresholds for the reprofiling trigger rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReprofilingConfig {
    /// Months since the last synthesis after which a full refresh is suggested.
    pub stale_after_months: i64,
    /// New behavioral events since synthesis that warrant an update.
    pub behavioral_event_threshold: u32,
    /// Decayed domain average below which the domain is weak.
    pub weak_domain_threshold: f64,
    /// Contradiction ratio above which resolution is suggested.
    pub contradiction_threshold: f64,
}

impl Default for ReprofilingConfig {
    fn default() -> Self {
        Self {
            stale_after_months: defaults::DEFAULT_STALE_AFTER_MONTHS,
            behavioral_event_threshold: defaults::DEFAULT_BEHAVIORAL_EVENT_THRESHOLD,
            weak_domain_threshold: defaults::DEFAULT_WEAK_DOMAIN_THRESHOLD,
            contradiction_threshold: defaults::DEFAULT_CONTRADICTION_THRESHOLD,
        }
    }
}
