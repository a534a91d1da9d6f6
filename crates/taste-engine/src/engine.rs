use chrono::{DateTime, Utc};
use taste_core::config::TasteConfig;
use taste_core::models::{
    DecayedSignal, DomainBreakdown, ReprofilingInput, ScoredPlace, UserDomainProfile,
};
use taste_core::signal::Confidence;
use taste_core::{Domain, PlaceSignal, Signal, TasteResult};
use taste_decay::DecayEngine;
use taste_scoring::MatchScorer;
use taste_trajectory::TrajectoryDetector;

use crate::assessment::ProfileAssessment;

/// Owns the match scorer, decay engine, and trajectory detector under one config.
///
/// Every component is immutable after construction, so a `TasteEngine` can be
/// shared across threads behind an `Arc` without locking.
#[derive(Debug)]
pub struct TasteEngine {
    config: TasteConfig,
    scorer: MatchScorer,
    decay: DecayEngine,
    trajectory: TrajectoryDetector,
}

impl TasteEngine {
    /// Engine with compiled defaults.
    pub fn new() -> Self {
        Self::from_config(TasteConfig::default())
    }

    /// Build every component from an already validated config.
    pub fn from_config(config: TasteConfig) -> Self {
        Self {
            scorer: MatchScorer::with_config(config.scoring.clone()),
            decay: DecayEngine::from_config(&config),
            trajectory: TrajectoryDetector::from_config(&config),
            config,
        }
    }

    /// Parse, validate, and build from a TOML string.
    pub fn from_toml(toml_str: &str) -> TasteResult<Self> {
        let config = TasteConfig::from_toml(toml_str)?;
        config.validate()?;
        Ok(Self::from_config(config))
    }

    pub fn config(&self) -> &TasteConfig {
        &self.config
    }

    pub fn scorer(&self) -> &MatchScorer {
        &self.scorer
    }

    pub fn decay_engine(&self) -> &DecayEngine {
        &self.decay
    }

    pub fn trajectory_detector(&self) -> &TrajectoryDetector {
        &self.trajectory
    }

    /// Score a place's evidence against a user's domain weights.
    pub fn score_place(
        &self,
        signals: &[PlaceSignal],
        anti_signals: &[PlaceSignal],
        profile: &UserDomainProfile,
    ) -> DomainBreakdown {
        self.scorer.score(signals, anti_signals, profile)
    }

    /// Score a place with the per-domain audit trail.
    pub fn score_place_detailed(
        &self,
        signals: &[PlaceSignal],
        anti_signals: &[PlaceSignal],
        profile: &UserDomainProfile,
    ) -> ScoredPlace {
        self.scorer.score_detailed(signals, anti_signals, profile)
    }

    pub fn decay_signals(&self, signals: &[Signal], now: DateTime<Utc>) -> Vec<DecayedSignal> {
        self.decay.decay_signals(signals, now)
    }

    /// Decay a user's signal history, evaluate reprofiling triggers, and
    /// compare the recent window against the historical one.
    ///
    /// Trajectory analysis sees only signals above the aged-out floor, each
    /// carrying its decayed confidence. It covers the core domains plus any
    /// extended domain present in the history.
    pub fn assess_profile(
        &self,
        history: &[Signal],
        last_synthesized_at: Option<DateTime<Utc>>,
        new_behavioral_events: u32,
        contradiction_ratio: f64,
        now: DateTime<Utc>,
    ) -> ProfileAssessment {
        let decayed = self.decay.decay_signals(history, now);
        let domain_confidence = self.decay.domain_confidence_snapshot(history, now);

        let reprofiling = self.decay.check_reprofiling_triggers(&ReprofilingInput {
            last_synthesized_at,
            new_behavioral_events,
            domain_confidence: domain_confidence.clone(),
            contradiction_ratio,
            now,
        });

        let active: Vec<Signal> = decayed
            .iter()
            .filter(|d| !d.is_aged_out)
            .map(|d| Signal {
                confidence: Confidence::new(d.decayed_confidence),
                ..d.signal.clone()
            })
            .collect();
        let windows = self.trajectory.partition(&active, now);
        let domains = domains_in_scope(history);
        let trajectory =
            self.trajectory
                .analyze_trajectory(&windows.current, &windows.historical, &domains, now);

        tracing::debug!(
            history = history.len(),
            active = active.len(),
            should_reprofile = reprofiling.should_reprofile,
            direction = %trajectory.direction,
            "profile assessed"
        );

        ProfileAssessment {
            decayed,
            domain_confidence,
            reprofiling,
            trajectory,
        }
    }
}

impl Default for TasteEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Core domains, then any extended domain that appears in `history`.
fn domains_in_scope(history: &[Signal]) -> Vec<Domain> {
    Domain::ALL
        .into_iter()
        .filter(|d| d.is_core() || history.iter().any(|s| s.domain == *d))
        .collect()
}
