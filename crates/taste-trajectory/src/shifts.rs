//! Per-domain shift detection.
//!
//! Each requested domain is judged independently:
//! - emerging: no history, at least `min_signals` now → `(none)` → current tags
//! - dormant: history exists, nothing now (or too few now against an established
//!   history) → historical tags → `(dormant)`
//! - changed: both windows have `min_signals`+ and the top-tag Jaccard overlap is
//!   below the threshold → historical tags → current tags

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use taste_core::config::TrajectoryConfig;
use taste_core::constants::{PATTERN_DORMANT, PATTERN_NONE};
use taste_core::models::{DomainCluster, TrajectoryShift};
use taste_core::Domain;

use crate::overlap::jaccard_overlap;

/// Detect shifts for `domains`, in the order given. Repeated domains are judged once.
pub fn detect_shifts(
    current: &BTreeMap<Domain, DomainCluster>,
    historical: &BTreeMap<Domain, DomainCluster>,
    domains: &[Domain],
    config: &TrajectoryConfig,
    detected_at: DateTime<Utc>,
) -> Vec<TrajectoryShift> {
    let mut judged: Vec<Domain> = Vec::with_capacity(domains.len());
    let mut shifts = Vec::new();

    for &domain in domains {
        if judged.contains(&domain) {
            continue;
        }
        judged.push(domain);

        let shift = detect_domain_shift(current.get(&domain), historical.get(&domain), config);
        if let Some((from_pattern, to_pattern)) = shift {
            shifts.push(TrajectoryShift {
                domain,
                from_pattern,
                to_pattern,
                detected_at,
            });
        }
    }

    shifts
}

/// Returns `(from_pattern, to_pattern)` when the domain shifted.
fn detect_domain_shift(
    current: Option<&DomainCluster>,
    historical: Option<&DomainCluster>,
    config: &TrajectoryConfig,
) -> Option<(String, String)> {
    let min = config.min_signals;
    match (current, historical) {
        (Some(now), None) if now.signal_count >= min => {
            Some((PATTERN_NONE.to_string(), now.pattern()))
        }
        (None, Some(then)) => Some((then.pattern(), PATTERN_DORMANT.to_string())),
        (Some(now), Some(then)) if now.signal_count < min && then.signal_count >= min => {
            Some((then.pattern(), PATTERN_DORMANT.to_string()))
        }
        (Some(now), Some(then)) if now.signal_count >= min && then.signal_count >= min => {
            let overlap = jaccard_overlap(&then.top_tags, &now.top_tags);
            (overlap < config.overlap_threshold).then(|| (then.pattern(), now.pattern()))
        }
        _ => None,
    }
}
