use serde::{Deserialize, Serialize};

use super::defaults;

/// Observability configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub log_level: String,
    /// Emit JSON log lines instead of human-readable output.
    pub json_output: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
            json_output: defaults::DEFAULT_JSON_OUTPUT,
        }
    }
}
