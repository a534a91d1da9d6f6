//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

use taste_core::models::{ReprofilingUrgency, TrajectoryDirection};

/// Log a completed place score.
pub fn place_scored(overall: u8, domain_count: usize, dropped: usize) {
    tracing::debug!(
        event = "place_scored",
        overall = overall,
        domain_count = domain_count,
        dropped = dropped,
        "place scored"
    );
}

/// Log a place signal whose dimension has no domain mapping.
pub fn dimension_dropped(dimension: &str, tag: &str) {
    tracing::debug!(
        event = "dimension_dropped",
        dimension = %dimension,
        tag = %tag,
        "unmapped dimension dropped"
    );
}

/// Log a batch decay pass.
pub fn signals_decayed(total: usize, aged_out: usize) {
    tracing::debug!(
        event = "signals_decayed",
        total = total,
        aged_out = aged_out,
        "signals decayed"
    );
}

/// Log a reprofiling verdict.
pub fn reprofiling_evaluated(should_reprofile: bool, urgency: ReprofilingUrgency, triggers: &[String]) {
    tracing::info!(
        event = "reprofiling_evaluated",
        should_reprofile = should_reprofile,
        urgency = ?urgency,
        triggers = ?triggers,
        "reprofiling evaluated"
    );
}

/// Log a trajectory classification.
pub fn trajectory_detected(direction: TrajectoryDirection, shift_count: usize, confidence: f64) {
    tracing::info!(
        event = "trajectory_detected",
        direction = %direction,
        shift_count = shift_count,
        confidence = confidence,
        "trajectory detected"
    );
}
