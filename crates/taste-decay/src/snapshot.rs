//! Per-domain decayed confidence, in the shape the reprofiling rules consume.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use taste_core::config::DecayConfig;
use taste_core::{Domain, Signal};

use crate::formula;

/// Mean decayed confidence per domain. Domains without signals are absent.
pub fn domain_confidence_snapshot(
    signals: &[Signal],
    config: &DecayConfig,
    now: DateTime<Utc>,
) -> BTreeMap<Domain, f64> {
    let mut per_domain: BTreeMap<Domain, Vec<f64>> = BTreeMap::new();
    for signal in signals {
        let decayed = formula::decay_confidence(
            signal.confidence.value(),
            signal.extracted_at,
            config.half_life_for(signal.domain),
            now,
        );
        per_domain.entry(signal.domain).or_default().push(decayed);
    }

    per_domain
        .into_iter()
        .map(|(domain, mut values)| {
            values.sort_by(f64::total_cmp);
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            (domain, mean)
        })
        .collect()
}
