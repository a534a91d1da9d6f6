//! # taste-engine
//!
//! One entry point over the three taste components. [`TasteEngine`] owns a
//! validated [`TasteConfig`] and one instance of each engine; it keeps no
//! state between calls.

pub mod assessment;
pub mod engine;

pub use assessment::ProfileAssessment;
pub use engine::TasteEngine;

pub use taste_core::{config::TasteConfig, TasteError, TasteResult};
