//! # Structured Logging
//!
//! Subscriber setup and span helpers built on the tracing ecosystem.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};
use crate::errors::{CertplaneError, Result};

/// Create a tracing span for one lifecycle operation.
///
/// The `owner` field stays empty for orphan cleanup and is filled with the
/// managed certificate reference otherwise:
///
/// ```rust,ignore
/// let span = lifecycle_span!("delete", "mcrt-1234");
/// let span = lifecycle_span!("create", "mcrt-1234", owner = "default/shop");
/// ```
#[macro_export]
macro_rules! lifecycle_span {
    ($operation:expr, $name:expr) => {
        tracing::debug_span!(
            "certificate_lifecycle",
            operation = %$operation,
            resource = %$name,
            owner = tracing::field::Empty
        )
    };
    ($operation:expr, $name:expr, owner = $owner:expr) => {
        tracing::debug_span!(
            "certificate_lifecycle",
            operation = %$operation,
            resource = %$name,
            owner = %$owner
        )
    };
}

/// Install the global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `config.level`. If a global subscriber is
/// already installed (tests, or an embedding binary) this is a no-op.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => level_filter(&config.level)?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };

    if installed.is_err() {
        // Subscriber already set elsewhere; keep it.
        tracing::debug!("Global tracing subscriber already installed");
    }

    Ok(())
}

/// Parse a filter directive such as `info` or `certplane=debug,warn`.
fn level_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level)
        .map_err(|e| CertplaneError::config(format!("Invalid log level '{}': {}", level, e)))
}
