//! Certificate backend abstraction
//!
//! The backend is the external service that provisions certificate resources
//! by name. It is the only source of truth; nothing here caches its state.
//!
//! ## Contents
//!
//! - `CertificateBackend`: create/delete/exists/get by resource name
//! - `BackendError`: structured failures (status code, detail reasons)
//! - `classify`: maps a failure to not-found, quota-exceeded or other
//! - `InMemoryCertificateBackend`: concurrent in-process backend for tests
//!   and local runs

pub mod backend;
pub mod classify;
pub mod error;
pub mod memory;

pub use backend::{BackendResult, CertificateBackend};
pub use classify::{classify, classify_result, is_not_found, is_quota_exceeded, Classification};
pub use error::{ApiError, BackendError, ErrorItem};
pub use memory::InMemoryCertificateBackend;
