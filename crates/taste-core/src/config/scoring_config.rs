use serde::{Deserialize, Serialize};

use super::defaults;

/// Domain match scoring configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Score given to a domain with no evidence.
    pub neutral_score: u8,
    /// Added to a corroborated signal's confidence, capped at 1.0.
    pub corroboration_bonus: f64,
    /// Signal count at which the density term saturates.
    pub density_saturation: usize,
    /// Weight of the average-confidence term.
    pub confidence_weight: f64,
    /// Weight of the density term.
    pub density_weight: f64,
    /// Anti-signal penalty is `round(confidence * scale)` points.
    pub anti_signal_penalty_scale: f64,
    /// Profile weight for a domain the user never set.
    pub default_weight: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            neutral_score: defaults::DEFAULT_NEUTRAL_SCORE,
            corroboration_bonus: defaults::DEFAULT_CORROBORATION_BONUS,
            density_saturation: defaults::DEFAULT_DENSITY_SATURATION,
            confidence_weight: defaults::DEFAULT_CONFIDENCE_WEIGHT,
            density_weight: defaults::DEFAULT_DENSITY_WEIGHT,
            anti_signal_penalty_scale: defaults::DEFAULT_ANTI_SIGNAL_PENALTY_SCALE,
            default_weight: defaults::DEFAULT_DOMAIN_WEIGHT,
        }
    }
}
