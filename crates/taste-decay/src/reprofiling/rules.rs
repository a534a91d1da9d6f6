//! The standard reprofiling rules.

use taste_core::constants::DAYS_PER_MONTH;
use taste_core::models::{ReprofilingInput, ReprofilingPhase};
use taste_core::Domain;

use super::{ReprofilingRule, RuleOutcome};

/// Cold start: nothing has ever been synthesized.
#[derive(Debug, Clone, Copy, Default)]
pub struct MissingProfileRule;

impl ReprofilingRule for MissingProfileRule {
    fn name(&self) -> &'static str {
        "missing_profile"
    }

    fn evaluate(&self, input: &ReprofilingInput) -> Option<RuleOutcome> {
        input.last_synthesized_at.is_none().then(|| {
            RuleOutcome::new("no profile on record", ReprofilingPhase::FullOnboarding)
        })
    }
}

/// The last synthesis is old enough to warrant a full refresh.
#[derive(Debug, Clone, Copy)]
pub struct StaleProfileRule {
    pub stale_after_months: i64,
}

impl ReprofilingRule for StaleProfileRule {
    fn name(&self) -> &'static str {
        "stale_profile"
    }

    fn evaluate(&self, input: &ReprofilingInput) -> Option<RuleOutcome> {
        let last = input.last_synthesized_at?;
        let months = (input.now - last).num_days() / DAYS_PER_MONTH;
        (months >= self.stale_after_months).then(|| {
            RuleOutcome::new(
                format!("profile last synthesized {months} months ago"),
                ReprofilingPhase::FullRefresh,
            )
        })
    }
}

/// Enough new behavior has accumulated since the last synthesis.
#[derive(Debug, Clone, Copy)]
pub struct BehavioralEventsRule {
    pub threshold: u32,
}

impl ReprofilingRule for BehavioralEventsRule {
    fn name(&self) -> &'static str {
        "behavioral_events"
    }

    fn evaluate(&self, input: &ReprofilingInput) -> Option<RuleOutcome> {
        (input.new_behavioral_events >= self.threshold).then(|| {
            RuleOutcome::new(
                format!(
                    "{} new behavioral events since last synthesis",
                    input.new_behavioral_events
                ),
                ReprofilingPhase::BehavioralUpdate,
            )
        })
    }
}

/// Some domains have decayed below the confidence threshold.
#[derive(Debug, Clone, Copy)]
pub struct WeakDomainRule {
    pub threshold: f64,
}

impl ReprofilingRule for WeakDomainRule {
    fn name(&self) -> &'static str {
        "weak_domains"
    }

    fn evaluate(&self, input: &ReprofilingInput) -> Option<RuleOutcome> {
        let weak: Vec<Domain> = input
            .domain_confidence
            .iter()
            .filter(|(_, confidence)| **confidence < self.threshold)
            .map(|(domain, _)| *domain)
            .collect();
        if weak.is_empty() {
            return None;
        }

        let names: Vec<&str> = weak.iter().map(|d| d.as_str()).collect();
        Some(RuleOutcome {
            trigger: format!("low confidence in: {}", names.join(", ")),
            phases: weak.iter().map(|d| ReprofilingPhase::Adaptive(*d)).collect(),
            weak_domains: weak,
        })
    }
}

/// Too many new signals conflict with earlier ones.
#[derive(Debug, Clone, Copy)]
pub struct ContradictionRule {
    pub threshold: f64,
}

impl ReprofilingRule for ContradictionRule {
    fn name(&self) -> &'static str {
        "contradictions"
    }

    fn evaluate(&self, input: &ReprofilingInput) -> Option<RuleOutcome> {
        (input.contradiction_ratio > self.threshold).then(|| {
            RuleOutcome::new(
                format!(
                    "contradiction ratio {:.2} exceeds {:.2}",
                    input.contradiction_ratio, self.threshold
                ),
                ReprofilingPhase::ContradictionResolution,
            )
        })
    }
}
