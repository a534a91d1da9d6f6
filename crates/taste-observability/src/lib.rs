//! # taste-observability
//!
//! Tracing subscriber setup, per-operation span macros, and structured log
//! events shared by the scoring, decay, and trajectory crates.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_from_config, init_tracing_with_filter};
