//! Tracing subscriber installation.

use std::env::VarError;

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;
use crate::errors::{ChronicleError, ChronicleResult};

/// Install the global fmt subscriber.
///
/// `RUST_LOG`, when set, replaces `config.log_level`. Fails if whichever
/// directive is in effect is malformed, or a global subscriber is already
/// installed.
pub fn init_tracing(config: &ObservabilityConfig) -> ChronicleResult<()> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) => EnvFilter::try_new(&directives).map_err(|e| {
            ChronicleError::ConfigError(format!(
                "invalid {} {directives:?}: {e}",
                EnvFilter::DEFAULT_ENV
            ))
        })?,
        Err(VarError::NotPresent) => EnvFilter::try_new(&config.log_level).map_err(|e| {
            ChronicleError::ConfigError(format!("invalid log level {:?}: {e}", config.log_level))
        })?,
        Err(e @ VarError::NotUnicode(_)) => {
            return Err(ChronicleError::ConfigError(format!(
                "invalid {}: {e}",
                EnvFilter::DEFAULT_ENV
            )));
        }
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| ChronicleError::ConfigError(format!("tracing init failed: {e}")))?;
    tracing::debug!(json = config.json, "tracing initialized");
    Ok(())
}
