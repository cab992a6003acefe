//! Structural classification of backend errors.
//!
//! Classification only pattern-matches on the error value. It performs no
//! I/O and gives the same answer for the same input.

use std::fmt;

use super::error::BackendError;

/// HTTP status the backend uses for a missing resource.
pub const STATUS_NOT_FOUND: u16 = 404;

/// HTTP status the backend uses for quota and permission failures.
pub const STATUS_FORBIDDEN: u16 = 403;

/// Detail reason that marks a 403 as a quota failure.
pub const REASON_QUOTA_EXCEEDED: &str = "quotaExceeded";

/// Outcome class of one backend call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// The call succeeded.
    None,
    /// The named resource does not exist.
    NotFound,
    /// The project is out of certificate quota.
    QuotaExceeded,
    /// Any other failure.
    Other,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::NotFound => "not_found",
            Self::QuotaExceeded => "quota_exceeded",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify an optional backend error. `None` classifies as
/// [`Classification::None`].
pub fn classify(err: Option<&BackendError>) -> Classification {
    match err {
        None => Classification::None,
        Some(err) => classify_error(err),
    }
}

/// Classify the error side of a backend result.
pub fn classify_result<T>(result: &Result<T, BackendError>) -> Classification {
    classify(result.as_ref().err())
}

pub(crate) fn classify_error(err: &BackendError) -> Classification {
    match err {
        BackendError::Api(api) if api.code == STATUS_NOT_FOUND => Classification::NotFound,
        BackendError::Api(api)
            if api.code == STATUS_FORBIDDEN && api.has_reason(REASON_QUOTA_EXCEEDED) =>
        {
            Classification::QuotaExceeded
        }
        _ => Classification::Other,
    }
}

/// Whether `err` reports a missing resource.
pub fn is_not_found(err: &BackendError) -> bool {
    classify_error(err) == Classification::NotFound
}

/// Whether `err` reports exhausted certificate quota.
pub fn is_quota_exceeded(err: &BackendError) -> bool {
    classify_error(err) == Classification::QuotaExceeded
}
