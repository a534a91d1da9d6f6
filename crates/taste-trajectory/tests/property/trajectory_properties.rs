use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use taste_core::models::TrajectoryDirection;
use taste_core::{Domain, Signal};
use taste_trajectory::TrajectoryDetector;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
}

fn signal_strategy() -> impl Strategy<Value = Signal> {
    (
        prop::sample::select(Domain::ALL.to_vec()),
        "[a-e]{1,2}",
        0.0f64..=1.0,
        0i64..300,
    )
        .prop_map(|(domain, tag, confidence, age)| {
            Signal::new(domain, tag, confidence, now() - Duration::days(age))
        })
}

proptest! {
    #[test]
    fn identical_windows_never_shift(window in prop::collection::vec(signal_strategy(), 0..40)) {
        let analysis = TrajectoryDetector::new()
            .analyze_trajectory(&window, &window, &Domain::ALL, now());
        prop_assert!(analysis.shifts.is_empty());
        prop_assert_eq!(analysis.direction, TrajectoryDirection::Stable);
    }

    #[test]
    fn confidence_stays_in_unit_range(
        current in prop::collection::vec(signal_strategy(), 0..40),
        historical in prop::collection::vec(signal_strategy(), 0..40),
    ) {
        let analysis = TrajectoryDetector::new()
            .analyze_trajectory(&current, &historical, &Domain::ALL, now());
        prop_assert!((0.0..=1.0).contains(&analysis.confidence));
    }

    #[test]
    fn at_most_one_shift_per_domain(
        current in prop::collection::vec(signal_strategy(), 0..40),
        historical in prop::collection::vec(signal_strategy(), 0..40),
    ) {
        let analysis = TrajectoryDetector::new()
            .analyze_trajectory(&current, &historical, &Domain::ALL, now());
        prop_assert!(analysis.shifts.len() <= Domain::COUNT);
        let mut domains: Vec<Domain> = analysis.shifts.iter().map(|s| s.domain).collect();
        domains.dedup();
        prop_assert_eq!(domains.len(), analysis.shifts.len());
    }

    #[test]
    fn partition_accounts_for_every_signal(
        signals in prop::collection::vec(signal_strategy(), 0..60),
    ) {
        let windows = TrajectoryDetector::new().partition(&signals, now());
        prop_assert_eq!(
            windows.current.len() + windows.historical.len() + windows.expired,
            signals.len()
        );
    }
}
