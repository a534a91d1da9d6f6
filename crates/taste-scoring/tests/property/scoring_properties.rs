use proptest::prelude::*;
use taste_core::models::UserDomainProfile;
use taste_core::{Domain, PlaceSignal};
use taste_scoring::MatchScorer;

const DIMENSIONS: &[&str] = &[
    "Design",
    "Scale & Intimacy",
    "Culture & Character",
    "Service & Hospitality",
    "Food & Drink",
    "Location & Setting",
    "Wellness",
    "Rhythm & Pace",
    "Nightlife",
];

fn arb_signal() -> impl Strategy<Value = PlaceSignal> {
    (
        prop::sample::select(DIMENSIONS),
        "[a-z]{3,8}",
        -0.5f64..1.5,
        any::<bool>(),
    )
        .prop_map(|(dimension, tag, confidence, corroborated)| PlaceSignal {
            dimension: dimension.to_string(),
            tag,
            confidence,
            corroborated,
        })
}

fn arb_profile() -> impl Strategy<Value = UserDomainProfile> {
    prop::collection::vec((prop::sample::select(Domain::ALL.to_vec()), 0.0f64..1.0), 0..8).prop_map(
        |weights| {
            weights
                .into_iter()
                .fold(UserDomainProfile::empty(), |p, (d, w)| p.with_weight(d, w))
        },
    )
}

proptest! {
    #[test]
    fn all_scores_bounded(
        signals in prop::collection::vec(arb_signal(), 0..60),
        anti in prop::collection::vec(arb_signal(), 0..20),
        profile in arb_profile(),
    ) {
        let breakdown = MatchScorer::new().score(&signals, &anti, &profile);
        prop_assert!(breakdown.overall <= 100);
        for (domain, score) in &breakdown.domains {
            prop_assert!(*score <= 100, "{} out of range: {}", domain, score);
        }
    }

    #[test]
    fn order_independent(
        signals in prop::collection::vec(arb_signal(), 0..60),
        anti in prop::collection::vec(arb_signal(), 0..20),
        rotate_by in 0usize..60,
    ) {
        let scorer = MatchScorer::new();
        let profile = UserDomainProfile::default();
        let original = scorer.score(&signals, &anti, &profile);

        let mut reversed = signals.clone();
        reversed.reverse();
        let mut rotated = signals.clone();
        if !rotated.is_empty() {
            let k = rotate_by % rotated.len();
            rotated.rotate_left(k);
        }
        let mut anti_reversed = anti.clone();
        anti_reversed.reverse();

        prop_assert_eq!(&original, &scorer.score(&reversed, &anti_reversed, &profile));
        prop_assert_eq!(&original, &scorer.score(&rotated, &anti, &profile));
    }

    #[test]
    fn anti_signals_never_raise_a_domain(
        signals in prop::collection::vec(arb_signal(), 0..40),
        anti in prop::collection::vec(arb_signal(), 1..20),
    ) {
        let scorer = MatchScorer::new();
        let profile = UserDomainProfile::default();
        let clean = scorer.score(&signals, &[], &profile);
        let penalized = scorer.score(&signals, &anti, &profile);
        for (domain, score) in &penalized.domains {
            let baseline = clean.score(*domain).unwrap_or(50);
            prop_assert!(*score <= baseline, "{} rose from {} to {}", domain, baseline, score);
        }
    }

    #[test]
    fn anti_only_domain_starts_at_neutral(
        anti in prop::collection::vec(0.0f64..1.0, 1..12),
    ) {
        let anti: Vec<PlaceSignal> = anti
            .into_iter()
            .map(|c| PlaceSignal::new("Food", "x", c))
            .collect();
        let expected_penalty: i64 = anti.iter().map(|a| (a.confidence * 5.0).round() as i64).sum();
        let breakdown = MatchScorer::new().score(&[], &anti, &UserDomainProfile::default());
        let food = i64::from(breakdown.score(Domain::Food).unwrap());
        prop_assert_eq!(food, (50 - expected_penalty).max(0));
    }
}
