pub mod config_error;

pub use config_error::ConfigError;

/// Top-level error type for the taste signal engine.
///
/// Scoring, decay, and trajectory computation never fail; errors only arise at
/// the edges where external text is parsed into engine types.
#[derive(Debug, thiserror::Error)]
pub enum TasteError {
    #[error("unknown taste domain: {name}")]
    UnknownDomain { name: String },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Convenience alias used throughout the workspace.
pub type TasteResult<T> = Result<T, TasteError>;
