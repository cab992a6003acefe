//! Error types returned by certificate backends.
//!
//! API errors keep the HTTP status code and per-item reason strings the
//! backend reported so that [`super::classify`] can inspect them.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::classify::{classify_error, Classification};

/// One detail entry in a backend API error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorItem {
    /// Machine-readable reason, e.g. `quotaExceeded` or `notFound`
    pub reason: String,
    #[serde(default)]
    pub message: String,
}

impl ErrorItem {
    pub fn new(reason: impl Into<String>, message: impl Into<String>) -> Self {
        Self { reason: reason.into(), message: message.into() }
    }
}

/// Structured error returned by the backend API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// HTTP status code of the failed call
    pub code: u16,
    pub message: String,
    #[serde(default)]
    pub errors: Vec<ErrorItem>,
}

impl ApiError {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self { code, message: message.into(), errors: Vec::new() }
    }

    /// Append a detail item
    pub fn with_item(mut self, reason: impl Into<String>, message: impl Into<String>) -> Self {
        self.errors.push(ErrorItem::new(reason, message));
        self
    }

    /// Whether any detail item carries `reason`
    pub fn has_reason(&self, reason: &str) -> bool {
        self.errors.iter().any(|item| item.reason == reason)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Backend API error {}: {}", self.code, self.message)?;
        let reasons: Vec<&str> = self.errors.iter().map(|item| item.reason.as_str()).collect();
        if !reasons.is_empty() {
            write!(f, " ({})", reasons.join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Errors that a certificate backend can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The backend answered with a structured API error.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The call never produced a backend answer (connection, timeout, TLS).
    #[error("Backend transport error: {message}")]
    Transport { message: String },

    /// Any other backend failure without a status code.
    #[error("Backend error: {message}")]
    Other { message: String },
}

impl BackendError {
    /// Create a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport { message: message.into() }
    }

    /// Create an unstructured backend error.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other { message: message.into() }
    }

    /// Status code of the underlying API error, if there is one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(api) => Some(api.code),
            _ => None,
        }
    }

    /// Classification of this error.
    pub fn classification(&self) -> Classification {
        classify_error(self)
    }
}
