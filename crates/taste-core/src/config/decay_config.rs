use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::signal::Domain;

/// Decay subsystem configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Half-life applied to every domain without an override.
    pub default_half_life_days: f64,
    /// Per-domain half-life overrides (days). Key is the domain name.
    pub half_life_overrides: BTreeMap<String, f64>,
}

impl DecayConfig {
    /// Half-life for a domain, honoring overrides.
    pub fn half_life_for(&self, domain: Domain) -> f64 {
        self.half_life_overrides
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(domain.as_str()))
            .map(|(_, days)| *days)
            .unwrap_or(self.default_half_life_days)
    }
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            default_half_life_days: defaults::DEFAULT_HALF_LIFE_DAYS,
            half_life_overrides: BTreeMap::new(),
        }
    }
}
