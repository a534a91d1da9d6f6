//! Direction classification from the shift list and cluster statistics.

use std::collections::BTreeMap;

use taste_core::config::TrajectoryConfig;
use taste_core::models::{DomainCluster, TrajectoryDirection, TrajectoryShift};
use taste_core::Domain;

/// Classify how taste is moving.
///
/// 1. no shifts → Stable
/// 2. more domains gained than lost, at least one emerging → Expanding
/// 3. more domains rising than falling in confidence, at most one new → Refining
/// 4. two or more shifts → Shifting
/// 5. otherwise Stable
pub fn classify_direction(
    shifts: &[TrajectoryShift],
    current: &BTreeMap<Domain, DomainCluster>,
    historical: &BTreeMap<Domain, DomainCluster>,
    domains: &[Domain],
    config: &TrajectoryConfig,
) -> TrajectoryDirection {
    if shifts.is_empty() {
        return TrajectoryDirection::Stable;
    }

    let gained = shifts.iter().filter(|s| s.is_emerging()).count();
    let lost = shifts.iter().filter(|s| s.is_dormant()).count();
    if gained > lost && gained >= 1 {
        return TrajectoryDirection::Expanding;
    }

    let (rising, falling) = confidence_movement(current, historical, domains, config.confidence_delta);
    if rising > falling && gained <= 1 {
        return TrajectoryDirection::Refining;
    }

    if shifts.len() >= 2 {
        return TrajectoryDirection::Shifting;
    }

    TrajectoryDirection::Stable
}

/// Count domains (present in both windows) whose mean confidence moved by more
/// than `delta`, as `(rising, falling)`.
pub fn confidence_movement(
    current: &BTreeMap<Domain, DomainCluster>,
    historical: &BTreeMap<Domain, DomainCluster>,
    domains: &[Domain],
    delta: f64,
) -> (usize, usize) {
    let mut rising = 0;
    let mut falling = 0;
    for domain in Domain::ALL.into_iter().filter(|d| domains.contains(d)) {
        let (Some(now), Some(then)) = (current.get(&domain), historical.get(&domain)) else {
            continue;
        };
        let change = now.avg_confidence - then.avg_confidence;
        if change > delta {
            rising += 1;
        } else if change < -delta {
            falling += 1;
        }
    }
    (rising, falling)
}
