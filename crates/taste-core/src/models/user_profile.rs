use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::defaults;
use crate::signal::Domain;

/// How much each domain matters to one user's matching.
///
/// Never required to be exhaustive: an unset domain reads as the neutral weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserDomainProfile {
    #[serde(default)]
    pub weights: BTreeMap<Domain, f64>,
}

impl UserDomainProfile {
    /// A profile with no explicit weights.
    pub fn empty() -> Self {
        Self {
            weights: BTreeMap::new(),
        }
    }

    /// Set a weight, clamped to [0.0, 1.0].
    pub fn with_weight(mut self, domain: Domain, weight: f64) -> Self {
        self.weights.insert(domain, clamp_weight(weight));
        self
    }

    /// Weight for a domain, falling back to the neutral 0.5.
    pub fn weight(&self, domain: Domain) -> f64 {
        self.weight_or(domain, defaults::DEFAULT_DOMAIN_WEIGHT)
    }

    /// Weight for a domain with a caller-supplied fallback.
    pub fn weight_or(&self, domain: Domain, fallback: f64) -> f64 {
        self.weights
            .get(&domain)
            .map(|w| clamp_weight(*w))
            .unwrap_or(fallback)
    }
}

impl Default for UserDomainProfile {
    /// The documented defaults used when a user has set nothing.
    fn default() -> Self {
        let weights = [
            (Domain::Design, defaults::DEFAULT_WEIGHT_DESIGN),
            (Domain::Character, defaults::DEFAULT_WEIGHT_CHARACTER),
            (Domain::Service, defaults::DEFAULT_WEIGHT_SERVICE),
            (Domain::Food, defaults::DEFAULT_WEIGHT_FOOD),
            (Domain::Location, defaults::DEFAULT_WEIGHT_LOCATION),
            (Domain::Wellness, defaults::DEFAULT_WEIGHT_WELLNESS),
        ]
        .into_iter()
        .collect();
        Self { weights }
    }
}

fn clamp_weight(w: f64) -> f64 {
    if w.is_nan() {
        0.0
    } else {
        w.clamp(0.0, 1.0)
    }
}
