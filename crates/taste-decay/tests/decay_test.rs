use chrono::{DateTime, Duration, TimeZone, Utc};
use taste_core::config::{DecayConfig, ReprofilingConfig};
use taste_core::traits::IDecayEngine;
use taste_core::{Domain, Signal};
use taste_decay::{compute_signal_age, decay_confidence, is_aged_out, DecayEngine};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap()
}

// ── Half-life property ───────────────────────────────────────────────────

#[test]
fn confidence_halves_at_exactly_one_half_life() {
    for c in [1.0, 0.9, 0.5, 0.33, 0.01] {
        let decayed = decay_confidence(c, t0(), 180.0, t0() + Duration::days(180));
        assert_eq!(decayed, c * 0.5, "half-life broken for {c}");
    }
}

#[test]
fn two_half_lives_quarter_the_confidence() {
    let decayed = decay_confidence(0.8, t0(), 180.0, t0() + Duration::days(360));
    assert!((decayed - 0.2).abs() < 1e-12);
}

#[test]
fn monotonically_decreasing_over_time() {
    let mut prev = 1.0;
    for days in [0, 1, 7, 30, 90, 180, 365, 1000] {
        let decayed = decay_confidence(1.0, t0(), 180.0, t0() + Duration::days(days));
        assert!(
            decayed <= prev,
            "Not monotonically decreasing at day {}: {} > {}",
            days,
            decayed,
            prev
        );
        prev = decayed;
    }
}

// ── Clock skew ───────────────────────────────────────────────────────────

#[test]
fn same_instant_returns_original() {
    assert_eq!(decay_confidence(0.73, t0(), 180.0, t0()), 0.73);
}

#[test]
fn future_extraction_returns_original() {
    let now = t0() - Duration::days(3);
    assert_eq!(decay_confidence(0.73, t0(), 180.0, now), 0.73);
    assert_eq!(compute_signal_age(t0(), now), 0);
}

// ── Aged-out boundary ────────────────────────────────────────────────────

#[test]
fn aged_out_boundary_at_floor() {
    // 0.1 decays to exactly 0.05 at one half-life: not below the floor yet.
    assert!(!is_aged_out(0.1, t0(), 180.0, t0() + Duration::days(180)));
    // Just before: comfortably above.
    assert!(!is_aged_out(0.1, t0(), 180.0, t0() + Duration::days(179)));
    // Just after: below.
    assert!(is_aged_out(
        0.1,
        t0(),
        180.0,
        t0() + Duration::days(180) + Duration::hours(1)
    ));
}

#[test]
fn aged_out_follows_decayed_value_just_above_and_below() {
    let now = t0() + Duration::days(90);
    let factor = 0.5_f64.powf(0.5);
    let at_floor = 0.05 / factor;
    assert!(!is_aged_out(at_floor + 1e-9, t0(), 180.0, now));
    assert!(is_aged_out(at_floor - 1e-9, t0(), 180.0, now));
}

#[test]
fn fresh_zero_confidence_is_aged_out() {
    assert!(is_aged_out(0.0, t0(), 180.0, t0()));
}

// ── Signal age ───────────────────────────────────────────────────────────

#[test]
fn signal_age_floors_to_whole_days() {
    assert_eq!(compute_signal_age(t0(), t0() + Duration::hours(23)), 0);
    assert_eq!(compute_signal_age(t0(), t0() + Duration::hours(24)), 1);
    assert_eq!(compute_signal_age(t0(), t0() + Duration::days(400)), 400);
}

// ── Engine ───────────────────────────────────────────────────────────────

#[test]
fn engine_decays_signal_without_mutating_it() {
    let engine = DecayEngine::new();
    let signal = Signal::new(Domain::Food, "natural_wine", 0.9, t0());
    let before = signal.clone();

    let decayed = engine.decay_signal(&signal, t0() + Duration::days(180));
    assert_eq!(signal, before);
    assert_eq!(decayed.signal, before);
    assert_eq!(decayed.age_in_days, 180);
    assert_eq!(decayed.decayed_confidence, 0.45);
    assert!(!decayed.is_aged_out);
}

#[test]
fn engine_honors_per_domain_half_life_overrides() {
    let mut config = DecayConfig::default();
    config.half_life_overrides.insert("Food".to_string(), 60.0);
    let engine = DecayEngine::with_config(config, &ReprofilingConfig::default());
    let now = t0() + Duration::days(60);

    let food = engine.decay_signal(&Signal::new(Domain::Food, "ramen", 0.8, t0()), now);
    let design = engine.decay_signal(&Signal::new(Domain::Design, "bauhaus", 0.8, t0()), now);
    assert_eq!(food.decayed_confidence, 0.4);
    assert!(design.decayed_confidence > 0.6);
}

#[test]
fn batch_decay_preserves_order_and_flags_aged_out() {
    let engine = DecayEngine::new();
    let now = t0() + Duration::days(1000);
    let signals = vec![
        Signal::new(Domain::Design, "old", 0.9, t0()),
        Signal::new(Domain::Design, "fresh", 0.9, now - Duration::days(1)),
    ];
    let decayed = engine.decay_signals(&signals, now);
    assert_eq!(decayed.len(), 2);
    assert_eq!(decayed[0].signal.tag, "old");
    assert!(decayed[0].is_aged_out);
    assert!(!decayed[1].is_aged_out);

    let active = engine.active_signals(&signals, now);
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].tag, "fresh");
}

#[test]
fn breakdown_product_equals_final_confidence() {
    let engine = DecayEngine::new();
    let signal = Signal::new(Domain::Service, "butler", 0.7, t0());
    let bd = engine.calculate_breakdown(&signal, t0() + Duration::days(45));

    assert_eq!(bd.original_confidence, 0.7);
    assert_eq!(bd.half_life_days, 180.0);
    assert!((bd.age_days - 45.0).abs() < 1e-9);
    assert!((bd.original_confidence * bd.decay_factor - bd.final_confidence).abs() < 1e-12);
}

#[test]
fn snapshot_averages_decayed_confidence_per_domain() {
    let engine = DecayEngine::new();
    let now = t0() + Duration::days(180);
    let signals = vec![
        Signal::new(Domain::Design, "a", 1.0, t0()),
        Signal::new(Domain::Design, "b", 0.6, t0()),
        Signal::new(Domain::Food, "c", 0.8, now),
    ];
    let snapshot = engine.domain_confidence_snapshot(&signals, now);
    assert_eq!(snapshot.len(), 2);
    assert!((snapshot[&Domain::Design] - 0.4).abs() < 1e-12);
    assert_eq!(snapshot[&Domain::Food], 0.8);
    assert!(!snapshot.contains_key(&Domain::Wellness));
}

#[test]
fn trait_decay_matches_inherent() {
    let engine = DecayEngine::new();
    let signal = Signal::new(Domain::Location, "waterfront", 0.66, t0());
    let now = t0() + Duration::days(12);
    let via_trait: &dyn IDecayEngine = &engine;
    assert_eq!(via_trait.decay(&signal, now).unwrap(), engine.decay_signal(&signal, now));
}
