//! Engine configuration, loaded from TOML with environment overrides.

pub mod decay_config;
pub mod defaults;
pub mod observability_config;
pub mod reprofiling_config;
pub mod scoring_config;
pub mod trajectory_config;

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use decay_config::DecayConfig;
pub use observability_config::ObservabilityConfig;
pub use reprofiling_config::ReprofilingConfig;
pub use scoring_config::ScoringConfig;
pub use trajectory_config::TrajectoryConfig;

use crate::errors::ConfigError;
use crate::signal::Domain;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`TASTE_*`)
/// 2. Config file passed to [`TasteConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TasteConfig {
    pub scoring: ScoringConfig,
    pub decay: DecayConfig,
    pub reprofiling: ReprofilingConfig,
    pub trajectory: TrajectoryConfig,
    pub observability: ObservabilityConfig,
}

impl TasteConfig {
    /// Load configuration from a TOML string. Missing keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load a config file, apply `TASTE_*` environment overrides, and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_env_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary lookup. Unparseable values are ignored.
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = parse_env(&lookup, "TASTE_HALF_LIFE_DAYS") {
            self.decay.default_half_life_days = v;
        }
        if let Some(v) = parse_env(&lookup, "TASTE_CORROBORATION_BONUS") {
            self.scoring.corroboration_bonus = v;
        }
        if let Some(v) = parse_env(&lookup, "TASTE_DEFAULT_WEIGHT") {
            self.scoring.default_weight = v;
        }
        if let Some(v) = parse_env(&lookup, "TASTE_STALE_AFTER_MONTHS") {
            self.reprofiling.stale_after_months = v;
        }
        if let Some(v) = parse_env(&lookup, "TASTE_RECENT_WINDOW_DAYS") {
            self.trajectory.recent_window_days = v;
        }
        if let Some(v) = parse_env(&lookup, "TASTE_HISTORICAL_WINDOW_DAYS") {
            self.trajectory.historical_window_days = v;
        }
        if let Some(level) = lookup("TASTE_LOG_LEVEL") {
            self.observability.log_level = level;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let unit_fields = [
            ("scoring.corroboration_bonus", self.scoring.corroboration_bonus),
            ("scoring.confidence_weight", self.scoring.confidence_weight),
            ("scoring.density_weight", self.scoring.density_weight),
            ("scoring.default_weight", self.scoring.default_weight),
            (
                "reprofiling.weak_domain_threshold",
                self.reprofiling.weak_domain_threshold,
            ),
            (
                "reprofiling.contradiction_threshold",
                self.reprofiling.contradiction_threshold,
            ),
            (
                "trajectory.overlap_threshold",
                self.trajectory.overlap_threshold,
            ),
        ];
        for (field, value) in unit_fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, "must be between 0.0 and 1.0"));
            }
        }
        if self.scoring.neutral_score > 100 {
            return Err(invalid("scoring.neutral_score", "must be between 0 and 100"));
        }
        let scale = self.scoring.anti_signal_penalty_scale;
        if !(scale.is_finite() && (0.0..=MAX_PENALTY_SCALE).contains(&scale)) {
            return Err(invalid(
                "scoring.anti_signal_penalty_scale",
                "must be between 0.0 and 100.0",
            ));
        }
        if self.scoring.density_saturation == 0 {
            return Err(invalid("scoring.density_saturation", "must be greater than 0"));
        }
        if !positive_finite(self.decay.default_half_life_days) {
            return Err(invalid("decay.default_half_life_days", "must be greater than 0"));
        }
        for (name, days) in &self.decay.half_life_overrides {
            if Domain::from_str(name).is_err() {
                return Err(invalid(
                    &format!("decay.half_life_overrides.{name}"),
                    "unknown domain",
                ));
            }
            if !positive_finite(*days) {
                return Err(invalid(
                    &format!("decay.half_life_overrides.{name}"),
                    "must be greater than 0",
                ));
            }
        }
        if self.trajectory.top_tags == 0 {
            return Err(invalid("trajectory.top_tags", "must be greater than 0"));
        }
        if self.trajectory.saturation_count == 0 {
            return Err(invalid("trajectory.saturation_count", "must be greater than 0"));
        }
        if self.trajectory.recent_window_days <= 0 {
            return Err(invalid("trajectory.recent_window_days", "must be greater than 0"));
        }
        if self.trajectory.historical_window_days <= self.trajectory.recent_window_days {
            return Err(invalid(
                "trajectory.historical_window_days",
                "must be greater than recent_window_days",
            ));
        }
        Ok(())
    }
}

/// One anti-signal can remove at most a full score.
const MAX_PENALTY_SCALE: f64 = 100.0;

fn parse_env<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key).and_then(|raw| raw.trim().parse().ok())
}

fn positive_finite(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
