use std::collections::BTreeMap;

use serde::Deserialize;
use taste_core::models::UserDomainProfile;
use taste_core::{Domain, PlaceSignal};
use taste_scoring::MatchScorer;

#[derive(Debug, Deserialize)]
struct ScoringScenario {
    name: String,
    signals: Vec<PlaceSignal>,
    anti_signals: Vec<PlaceSignal>,
    expected: ExpectedScore,
}

#[derive(Debug, Deserialize)]
struct ExpectedScore {
    domains: BTreeMap<Domain, u8>,
    overall: u8,
    dropped: usize,
}

#[test]
fn golden_scoring_scenarios() {
    let scenarios: Vec<(String, ScoringScenario)> = test_fixtures::load_all("scoring");
    assert!(!scenarios.is_empty(), "no scoring fixtures found");

    let scorer = MatchScorer::new();
    let profile = UserDomainProfile::default();
    for (file, scenario) in scenarios {
        let scored = scorer.score_detailed(&scenario.signals, &scenario.anti_signals, &profile);
        assert_eq!(
            scored.breakdown.domains, scenario.expected.domains,
            "{file} ({}): domain scores",
            scenario.name
        );
        assert_eq!(scored.breakdown.overall, scenario.expected.overall, "{file}: overall");
        assert_eq!(scored.dropped, scenario.expected.dropped, "{file}: dropped");
    }
}

#[test]
fn golden_scoring_is_order_independent() {
    let scenarios: Vec<(String, ScoringScenario)> = test_fixtures::load_all("scoring");
    let scorer = MatchScorer::new();
    let profile = UserDomainProfile::default();
    for (file, mut scenario) in scenarios {
        let forward = scorer.score(&scenario.signals, &scenario.anti_signals, &profile);
        scenario.signals.reverse();
        scenario.anti_signals.reverse();
        let reversed = scorer.score(&scenario.signals, &scenario.anti_signals, &profile);
        assert_eq!(forward, reversed, "{file}");
    }
}
