//! # taste-decay
//!
//! Continuous half-life decay of signal confidence, aged-out detection,
//! per-domain decayed confidence snapshots, and the reprofiling trigger rules.

pub mod engine;
pub mod formula;
pub mod reprofiling;
pub mod snapshot;

pub use engine::DecayEngine;
pub use formula::{compute_signal_age, decay_confidence, is_aged_out};
pub use reprofiling::{ReprofilingEvaluator, ReprofilingRule, RuleOutcome};
pub use snapshot::domain_confidence_snapshot;
