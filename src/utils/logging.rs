//! Tracing subscriber setup

use crate::config::LoggingConfig;
use crate::utils::error::{Result, StudyGeniusError};
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` when set, otherwise the configured level
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            StudyGeniusError::config(format!("Invalid log level '{}': {}", config.level, e))
        }),
    }
}

/// Install the global subscriber
///
/// Logs go to stderr so command output on stdout stays machine-readable.
/// Calling this twice is an error from `tracing-subscriber`, reported as a
/// configuration error.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| StudyGeniusError::config(format!("Failed to initialise logging: {}", e)))
}
