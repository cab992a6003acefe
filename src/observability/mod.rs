//! # Observability Infrastructure
//!
//! Structured logging and metrics for certplane.

pub mod logging;
pub mod metrics;

pub use self::logging::init_logging;
pub use self::metrics::{describe_metrics, EventMetrics};

use crate::config::LoggingConfig;
use crate::errors::Result;
use ::tracing::info;

/// Initialize logging and register metric descriptions.
pub fn init_observability(config: &LoggingConfig) -> Result<()> {
    init_logging(config)?;
    describe_metrics();

    info!(
        log_level = %config.level,
        log_format = %config.format,
        "Observability initialized"
    );

    Ok(())
}
