/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("failed to parse config {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("invalid config value for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}
