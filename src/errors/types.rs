//! # Error Types
//!
//! Crate-level error type for configuration, naming, and backend failures.

use crate::backends::BackendError;
use crate::naming::NameError;

/// Custom result type for certplane operations
pub type Result<T> = std::result::Result<T, CertplaneError>;

/// Main error type for certplane setup and caller-side orchestration.
///
/// The lifecycle manager itself returns [`BackendError`] unchanged so callers
/// keep the full backend diagnostics; this type is what surrounding code
/// (configuration loading, name minting, reconcile glue) converts into.
#[derive(thiserror::Error, Debug)]
pub enum CertplaneError {
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String, field: Option<String> },

    /// Certificate backend errors
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Resource name generation errors
    #[error(transparent)]
    Naming(#[from] NameError),

    /// Internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CertplaneError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation { message: message.into(), field: None }
    }

    /// Create a validation error with field information
    pub fn validation_field<S: Into<String>, F: Into<String>>(message: S, field: F) -> Self {
        Self::Validation { message: message.into(), field: Some(field.into()) }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal { message: message.into() }
    }

    /// Whether this error came from the certificate backend
    pub fn is_backend(&self) -> bool {
        matches!(self, Self::Backend(_))
    }
}

impl From<validator::ValidationErrors> for CertplaneError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field = errors.field_errors().keys().next().map(|field| field.to_string());
        Self::Validation { message: errors.to_string(), field }
    }
}
