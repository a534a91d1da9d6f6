//! # taste-trajectory
//!
//! Compares a recent signal window against a historical one:
//! clustering → per-domain shift detection → direction classification.

pub mod clustering;
pub mod description;
pub mod direction;
pub mod engine;
pub mod overlap;
pub mod shifts;
pub mod windows;

pub use clustering::cluster_signals;
pub use description::describe;
pub use direction::{classify_direction, confidence_movement};
pub use engine::TrajectoryDetector;
pub use overlap::jaccard_overlap;
pub use shifts::detect_shifts;
pub use windows::{partition_windows, SignalWindows};
