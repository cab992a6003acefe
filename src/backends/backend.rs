//! Certificate backend trait definition.
//!
//! This module defines the `CertificateBackend` trait for the external
//! service that provisions TLS certificate resources by name.

use crate::domain::SslCertificate;
use async_trait::async_trait;

use super::error::BackendError;

/// Result type for backend calls.
pub type BackendResult<T> = std::result::Result<T, BackendError>;

/// Certificate-provisioning backend, addressed by resource name.
///
/// Implementations must be thread-safe (`Send + Sync`); one backend is shared
/// by every caller of a lifecycle manager. Timeouts and cancellation belong to
/// the implementation's transport.
///
/// Errors must keep their status code and detail reasons (see
/// [`super::ApiError`]) so the lifecycle manager can classify them.
#[async_trait]
pub trait CertificateBackend: Send + Sync + std::fmt::Debug {
    /// Request a new certificate resource named `name` covering `domains`.
    async fn create(&self, name: &str, domains: &[String]) -> BackendResult<()>;

    /// Remove the certificate resource named `name`.
    ///
    /// A missing resource is reported as a 404 API error.
    async fn delete(&self, name: &str) -> BackendResult<()>;

    /// Whether a certificate resource named `name` exists.
    async fn exists(&self, name: &str) -> BackendResult<bool>;

    /// Fetch the certificate resource named `name`, if present.
    async fn get(&self, name: &str) -> BackendResult<Option<SslCertificate>>;
}
