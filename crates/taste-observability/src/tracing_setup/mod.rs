//! Tracing setup: subscriber init, span definitions, and structured events.

pub mod events;
pub mod spans;

use std::sync::Once;

use taste_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `TASTE_LOG` environment variable for filtering.
/// Defaults to `info` level if not set. Only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("TASTE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init();
    });
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init();
    });
}

/// Initialize tracing from the `[observability]` config section.
///
/// `TASTE_LOG` still wins over the configured level when set.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("TASTE_LOG")
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true);
        let _ = if config.json_output {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
    });
}
