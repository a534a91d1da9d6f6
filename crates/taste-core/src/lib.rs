//! # taste-core
//!
//! Foundation crate for the taste signal engine.
//! Defines the shared domain vocabulary, signal types, result models, traits,
//! errors, config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod signal;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TasteConfig;
pub use errors::{TasteError, TasteResult};
pub use models::{DomainBreakdown, UserDomainProfile};
pub use signal::{AntiSignal, Confidence, Domain, PlaceSignal, Signal};
