use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::signal::Domain;

/// One domain's signals within a single analysis window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainCluster {
    pub domain: Domain,
    /// Highest-confidence distinct tags, best first.
    pub top_tags: Vec<String>,
    pub avg_confidence: f64,
    pub signal_count: usize,
}

impl DomainCluster {
    /// Top tags joined into a pattern string.
    pub fn pattern(&self) -> String {
        self.top_tags.join(crate::constants::PATTERN_SEPARATOR)
    }
}
