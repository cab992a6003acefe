//! # Configuration Management
//!
//! Configuration for the lifecycle layer, loaded from environment variables:
//!
//! - `CERTPLANE_NAME_PREFIX`: prefix of generated certificate names (default `mcrt-`)
//! - `CERTPLANE_LOG_LEVEL`: default log filter directive (default `info`)
//! - `CERTPLANE_LOG_FORMAT`: `text` or `json` (default `text`)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::errors::{CertplaneError, Result};
use crate::naming::{self, RandomNameGenerator};

pub const ENV_NAME_PREFIX: &str = "CERTPLANE_NAME_PREFIX";
pub const ENV_LOG_LEVEL: &str = "CERTPLANE_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "CERTPLANE_LOG_FORMAT";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LifecycleConfig {
    #[validate(nested)]
    pub naming: NamingConfig,

    #[validate(nested)]
    pub logging: LoggingConfig,
}

impl LifecycleConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(prefix) = env_value(ENV_NAME_PREFIX) {
            config.naming.name_prefix = prefix;
        }
        if let Some(level) = env_value(ENV_LOG_LEVEL) {
            config.logging.level = level;
        }
        if let Some(format) = env_value(ENV_LOG_FORMAT) {
            config.logging.format = format.parse().map_err(CertplaneError::config)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self)?;

        naming::validate_prefix(&self.naming.name_prefix).map_err(|e| {
            CertplaneError::validation_field(e.to_string(), "naming.name_prefix")
        })?;

        Ok(())
    }
}

/// Trimmed, non-empty value of an environment variable
fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}

/// Certificate naming configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NamingConfig {
    /// Prefix for generated backend certificate names
    #[validate(length(min = 1, max = 27, message = "Name prefix must be 1 to 27 characters"))]
    pub name_prefix: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self { name_prefix: naming::DEFAULT_PREFIX.to_string() }
    }
}

impl NamingConfig {
    /// Build a name generator for this prefix
    pub fn generator(&self) -> Result<RandomNameGenerator> {
        Ok(RandomNameGenerator::new(self.name_prefix.clone())?)
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    #[validate(length(min = 1, message = "Log level cannot be empty"))]
    pub level: String,

    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: LogFormat::Text }
    }
}
