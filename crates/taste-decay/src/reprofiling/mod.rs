//! Reprofiling trigger evaluation.
//!
//! An ordered list of independent rules. Each rule looks at the same
//! [`ReprofilingInput`] and contributes at most one trigger string plus the
//! conversation phases that would address it. Adding a rule never touches the
//! existing ones.

pub mod rules;
pub mod urgency;

use std::fmt;

use taste_core::config::ReprofilingConfig;
use taste_core::models::{ReprofilingAssessment, ReprofilingInput, ReprofilingPhase};
use taste_core::Domain;
use taste_observability::{events, reprofiling_span};

pub use rules::{
    BehavioralEventsRule, ContradictionRule, MissingProfileRule, StaleProfileRule, WeakDomainRule,
};

/// What a single rule contributes when it fires.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    pub trigger: String,
    pub phases: Vec<ReprofilingPhase>,
    /// Domains the rule judged weak; counted toward urgency.
    pub weak_domains: Vec<Domain>,
}

impl RuleOutcome {
    pub fn new(trigger: impl Into<String>, phase: ReprofilingPhase) -> Self {
        Self {
            trigger: trigger.into(),
            phases: vec![phase],
            weak_domains: Vec::new(),
        }
    }
}

/// One predicate → trigger pair.
pub trait ReprofilingRule: Send + Sync {
    /// Stable identifier for logging.
    fn name(&self) -> &'static str;

    /// Returns `Some` when the rule fires.
    fn evaluate(&self, input: &ReprofilingInput) -> Option<RuleOutcome>;
}

/// Runs the rule list and folds the outcomes into an assessment.
pub struct ReprofilingEvaluator {
    rules: Vec<Box<dyn ReprofilingRule>>,
}

impl ReprofilingEvaluator {
    /// The standard rule list, thresholds taken from config.
    pub fn from_config(config: &ReprofilingConfig) -> Self {
        Self {
            rules: vec![
                Box::new(MissingProfileRule),
                Box::new(StaleProfileRule {
                    stale_after_months: config.stale_after_months,
                }),
                Box::new(BehavioralEventsRule {
                    threshold: config.behavioral_event_threshold,
                }),
                Box::new(WeakDomainRule {
                    threshold: config.weak_domain_threshold,
                }),
                Box::new(ContradictionRule {
                    threshold: config.contradiction_threshold,
                }),
            ],
        }
    }

    /// An evaluator with no rules.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule; it runs after the existing ones.
    pub fn with_rule(mut self, rule: Box<dyn ReprofilingRule>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn evaluate(&self, input: &ReprofilingInput) -> ReprofilingAssessment {
        let _span = reprofiling_span!(input.last_synthesized_at.is_some()).entered();

        let mut triggers = Vec::new();
        let mut suggested_phases: Vec<ReprofilingPhase> = Vec::new();
        let mut weak_domains: Vec<Domain> = Vec::new();

        for rule in &self.rules {
            let Some(outcome) = rule.evaluate(input) else {
                continue;
            };
            tracing::debug!(rule = rule.name(), trigger = %outcome.trigger, "reprofiling rule fired");
            triggers.push(outcome.trigger);
            for phase in outcome.phases {
                if !suggested_phases.contains(&phase) {
                    suggested_phases.push(phase);
                }
            }
            for domain in outcome.weak_domains {
                if !weak_domains.contains(&domain) {
                    weak_domains.push(domain);
                }
            }
        }

        let urgency = urgency::classify(triggers.len(), weak_domains.len());
        let assessment = ReprofilingAssessment {
            should_reprofile: !triggers.is_empty(),
            urgency,
            triggers,
            suggested_phases,
        };
        events::reprofiling_evaluated(
            assessment.should_reprofile,
            assessment.urgency,
            &assessment.triggers,
        );
        assessment
    }
}

impl Default for ReprofilingEvaluator {
    fn default() -> Self {
        Self::from_config(&ReprofilingConfig::default())
    }
}

impl fmt::Debug for ReprofilingEvaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReprofilingEvaluator")
            .field("rules", &self.rule_names())
            .finish()
    }
}
