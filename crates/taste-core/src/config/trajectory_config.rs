use serde::{Deserialize, Serialize};

use super::defaults;

/// Trajectory detection configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrajectoryConfig {
    /// Tags kept per domain cluster.
    pub top_tags: usize,
    /// Signals a window needs before a domain counts as present in it.
    pub min_signals: usize,
    /// Jaccard overlap below which a domain's pattern counts as shifted.
    pub overlap_threshold: f64,
    /// Average-confidence change that counts as rising or falling.
    pub confidence_delta: f64,
    /// Total signal count at which the assessment confidence saturates.
    pub saturation_count: usize,
    /// Age (days) separating the recent window from the historical one.
    pub recent_window_days: i64,
    /// Maximum age (days) of the historical window.
    pub historical_window_days: i64,
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self {
            top_tags: defaults::DEFAULT_TOP_TAGS,
            min_signals: defaults::DEFAULT_MIN_SIGNALS,
            overlap_threshold: defaults::DEFAULT_OVERLAP_THRESHOLD,
            confidence_delta: defaults::DEFAULT_CONFIDENCE_DELTA,
            saturation_count: defaults::DEFAULT_SATURATION_COUNT,
            recent_window_days: defaults::DEFAULT_RECENT_WINDOW_DAYS,
            historical_window_days: defaults::DEFAULT_HISTORICAL_WINDOW_DAYS,
        }
    }
}
