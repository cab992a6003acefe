//! Random backend resource names
//!
//! Backend certificate names must be unique and the managed certificate
//! carries no backend-compatible identifier, so new resources get a prefix
//! followed by a random v4 UUID drawn from the OS entropy source:
//!
//! ```text
//! mcrt-8d6f3c1e-5b7a-4c92-9e0d-1f2a3b4c5d6e
//! ```
//!
//! Generation keeps no state between calls and is safe to call from any
//! number of tasks at once.

use rand::rngs::OsRng;
use rand::RngCore;
use regex::Regex;
use thiserror::Error;
use uuid::Builder;

/// Names are strictly shorter than 64 characters.
pub const MAX_NAME_LENGTH: usize = 63;

/// Length of the hyphenated UUID token.
const TOKEN_LENGTH: usize = 36;

/// Longest prefix that still leaves room for the token.
pub const MAX_PREFIX_LENGTH: usize = MAX_NAME_LENGTH - TOKEN_LENGTH;

pub const DEFAULT_PREFIX: &str = "mcrt-";

/// Lowercase letter first, then lowercase letters, digits or hyphens.
static PREFIX_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9-]*$").unwrap());

/// Errors raised while minting a resource name.
#[derive(Error, Debug)]
pub enum NameError {
    /// The OS entropy source could not supply random bytes.
    #[error("Failed to generate random name: {0}")]
    Entropy(String),

    /// The configured prefix cannot produce valid backend names.
    #[error("Invalid name prefix '{prefix}': {reason}")]
    InvalidPrefix { prefix: String, reason: String },
}

/// Check that `prefix` can lead a backend resource name.
pub fn validate_prefix(prefix: &str) -> Result<(), NameError> {
    let invalid = |reason: String| NameError::InvalidPrefix { prefix: prefix.to_string(), reason };

    if prefix.len() > MAX_PREFIX_LENGTH {
        return Err(invalid(format!("must be at most {} characters", MAX_PREFIX_LENGTH)));
    }
    if !PREFIX_REGEX.is_match(prefix) {
        return Err(invalid(
            "must start with a lowercase letter and contain only lowercase letters, digits or '-'"
                .to_string(),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomNameGenerator {
    prefix: String,
}

impl Default for RandomNameGenerator {
    fn default() -> Self {
        Self { prefix: DEFAULT_PREFIX.to_string() }
    }
}

impl RandomNameGenerator {
    /// Generator with a validated prefix.
    pub fn new(prefix: impl Into<String>) -> Result<Self, NameError> {
        let prefix = prefix.into();
        validate_prefix(&prefix)?;
        Ok(Self { prefix })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Mint a fresh name.
    ///
    /// Fails only if the OS entropy source is unavailable; the caller cannot
    /// create an unnamed resource and should treat that as fatal for the
    /// current attempt.
    pub fn generate(&self) -> Result<String, NameError> {
        let mut bytes = [0u8; 16];
        OsRng.try_fill_bytes(&mut bytes).map_err(|e| NameError::Entropy(e.to_string()))?;

        let token = Builder::from_random_bytes(bytes).into_uuid();
        Ok(format!("{}{}", self.prefix, token.hyphenated()))
    }
}

/// Mint a name with the default prefix.
pub fn random_name() -> Result<String, NameError> {
    RandomNameGenerator::default().generate()
}
