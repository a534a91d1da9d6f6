use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use taste_core::config::{DecayConfig, ReprofilingConfig, TasteConfig};
use taste_core::constants::AGED_OUT_FLOOR;
use taste_core::errors::TasteResult;
use taste_core::models::{DecayBreakdown, DecayedSignal, ReprofilingAssessment, ReprofilingInput};
use taste_core::traits::IDecayEngine;
use taste_core::{Domain, Signal};
use taste_observability::{decay_span, events};

use crate::formula;
use crate::reprofiling::ReprofilingEvaluator;
use crate::snapshot;

/// Decay engine: half-life decay with per-domain overrides, aged-out flags,
/// and reprofiling trigger evaluation.
///
/// Holds only immutable configuration; every call takes an explicit `now`.
#[derive(Debug)]
pub struct DecayEngine {
    config: DecayConfig,
    evaluator: ReprofilingEvaluator,
}

impl DecayEngine {
    /// Create a DecayEngine with the default 180-day half-life and standard rules.
    pub fn new() -> Self {
        Self {
            config: DecayConfig::default(),
            evaluator: ReprofilingEvaluator::default(),
        }
    }

    pub fn with_config(config: DecayConfig, reprofiling: &ReprofilingConfig) -> Self {
        Self {
            config,
            evaluator: ReprofilingEvaluator::from_config(reprofiling),
        }
    }

    pub fn from_config(config: &TasteConfig) -> Self {
        Self::with_config(config.decay.clone(), &config.reprofiling)
    }

    /// Replace the reprofiling rule list.
    pub fn with_evaluator(mut self, evaluator: ReprofilingEvaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn config(&self) -> &DecayConfig {
        &self.config
    }

    /// Half-life applied to a domain's signals.
    pub fn half_life_for(&self, domain: Domain) -> f64 {
        self.config.half_life_for(domain)
    }

    /// Decay one signal relative to `now`.
    pub fn decay_signal(&self, signal: &Signal, now: DateTime<Utc>) -> DecayedSignal {
        let decayed = formula::decay_confidence(
            signal.confidence.value(),
            signal.extracted_at,
            self.half_life_for(signal.domain),
            now,
        );
        DecayedSignal {
            signal: signal.clone(),
            age_in_days: formula::compute_signal_age(signal.extracted_at, now),
            decayed_confidence: decayed,
            is_aged_out: decayed < AGED_OUT_FLOOR,
        }
    }

    /// Decay a batch of signals, preserving input order.
    pub fn decay_signals(&self, signals: &[Signal], now: DateTime<Utc>) -> Vec<DecayedSignal> {
        let _span = decay_span!(signals.len()).entered();
        let decayed: Vec<DecayedSignal> =
            signals.iter().map(|s| self.decay_signal(s, now)).collect();
        let aged_out = decayed.iter().filter(|d| d.is_aged_out).count();
        events::signals_decayed(decayed.len(), aged_out);
        decayed
    }

    /// Signals still above the aged-out floor.
    pub fn active_signals(&self, signals: &[Signal], now: DateTime<Utc>) -> Vec<Signal> {
        signals
            .iter()
            .filter(|s| !self.decay_signal(s, now).is_aged_out)
            .cloned()
            .collect()
    }

    /// Calculate decay with a full breakdown of each input.
    pub fn calculate_breakdown(&self, signal: &Signal, now: DateTime<Utc>) -> DecayBreakdown {
        formula::compute_breakdown(
            signal.confidence.value(),
            signal.extracted_at,
            self.half_life_for(signal.domain),
            now,
        )
    }

    /// Mean decayed confidence per domain.
    pub fn domain_confidence_snapshot(
        &self,
        signals: &[Signal],
        now: DateTime<Utc>,
    ) -> BTreeMap<Domain, f64> {
        snapshot::domain_confidence_snapshot(signals, &self.config, now)
    }

    /// Evaluate whether the user's profile should be re-extracted.
    pub fn check_reprofiling_triggers(&self, input: &ReprofilingInput) -> ReprofilingAssessment {
        self.evaluator.evaluate(input)
    }
}

impl Default for DecayEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IDecayEngine for DecayEngine {
    fn decay(&self, signal: &Signal, now: DateTime<Utc>) -> TasteResult<DecayedSignal> {
        Ok(self.decay_signal(signal, now))
    }

    fn check_reprofiling(&self, input: &ReprofilingInput) -> TasteResult<ReprofilingAssessment> {
        Ok(self.check_reprofiling_triggers(input))
    }
}
