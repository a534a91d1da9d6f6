use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use taste_decay::{decay_confidence, is_aged_out};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

proptest! {
    #[test]
    fn decay_is_strict_at_sub_second_ages(
        confidence in 0.01f64..=1.0,
        age_nanos in 1i64..1_000_000_000,
    ) {
        let now = t0() + Duration::nanoseconds(age_nanos);
        prop_assert!(decay_confidence(confidence, t0(), 180.0, now) < confidence);
    }

    #[test]
    fn decay_never_exceeds_original(
        confidence in 0.0f64..=1.0,
        age_secs in -10_000_000i64..100_000_000,
        half_life in 1.0f64..1000.0,
    ) {
        let now = t0() + Duration::seconds(age_secs);
        let decayed = decay_confidence(confidence, t0(), half_life, now);
        prop_assert!(decayed <= confidence);
        prop_assert!(decayed >= 0.0);
    }

    #[test]
    fn decay_is_strict_once_time_passes(
        confidence in 0.01f64..=1.0,
        age_secs in 1i64..100_000_000,
    ) {
        let now = t0() + Duration::seconds(age_secs);
        prop_assert!(decay_confidence(confidence, t0(), 180.0, now) < confidence);
    }

    #[test]
    fn no_decay_under_clock_skew(
        confidence in 0.0f64..=1.0,
        skew_secs in 0i64..100_000_000,
    ) {
        let now = t0() - Duration::seconds(skew_secs);
        prop_assert_eq!(decay_confidence(confidence, t0(), 180.0, now), confidence);
    }

    #[test]
    fn half_life_is_exact(confidence in 0.0f64..=1.0, offset_days in 0i64..3650) {
        let start = t0() + Duration::days(offset_days);
        let decayed = decay_confidence(confidence, start, 180.0, start + Duration::days(180));
        prop_assert_eq!(decayed, confidence * 0.5);
    }

    #[test]
    fn aged_out_iff_below_floor(
        confidence in 0.0f64..=1.0,
        age_days in 0i64..2000,
    ) {
        let now = t0() + Duration::days(age_days);
        let decayed = decay_confidence(confidence, t0(), 180.0, now);
        prop_assert_eq!(is_aged_out(confidence, t0(), 180.0, now), decayed < 0.05);
    }
}
