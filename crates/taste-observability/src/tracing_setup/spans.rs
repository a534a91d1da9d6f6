//! Span definitions per operation: scoring, decay, trajectory, reprofiling.

/// Create a place scoring span.
#[macro_export]
macro_rules! scoring_span {
    ($signal_count:expr, $anti_signal_count:expr) => {
        tracing::debug_span!(
            "taste.scoring",
            signal_count = $signal_count,
            anti_signal_count = $anti_signal_count
        )
    };
}

/// Create a decay span.
#[macro_export]
macro_rules! decay_span {
    ($signal_count:expr) => {
        tracing::debug_span!("taste.decay", signal_count = $signal_count)
    };
}

/// Create a trajectory analysis span.
#[macro_export]
macro_rules! trajectory_span {
    ($current:expr, $historical:expr) => {
        tracing::debug_span!("taste.trajectory", current = $current, historical = $historical)
    };
}

/// Create a reprofiling evaluation span.
#[macro_export]
macro_rules! reprofiling_span {
    ($has_profile:expr) => {
        tracing::debug_span!("taste.reprofiling", has_profile = $has_profile)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SCORING: &str = "taste.scoring";
    pub const DECAY: &str = "taste.decay";
    pub const TRAJECTORY: &str = "taste.trajectory";
    pub const REPROFILING: &str = "taste.reprofiling";
}
