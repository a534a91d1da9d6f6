//! # taste-scoring
//!
//! Domain match scorer: place signals → dimension table → per-domain scores →
//! anti-signal penalties → profile-weighted overall score.

pub mod dimension_table;
pub mod domain_score;
pub mod scorer;

pub use dimension_table::DimensionTable;
pub use scorer::MatchScorer;
