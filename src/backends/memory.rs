//! In-memory certificate backend.
//!
//! Behaves like the hosted backend at the error boundary: a duplicate create
//! is a 409, deleting an absent name is a 404, and creating past the
//! configured quota is a 403 carrying a `quotaExceeded` detail item.
//!
//! ```rust,ignore
//! use certplane::backends::{BackendError, InMemoryCertificateBackend};
//!
//! let backend = InMemoryCertificateBackend::with_quota(10);
//!
//! // Test error handling
//! backend.fail_next(BackendError::transport("connection reset"));
//! assert!(backend.create("mcrt-1", &[]).await.is_err());
//! ```

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tracing::debug;

use super::backend::{BackendResult, CertificateBackend};
use super::classify::{REASON_QUOTA_EXCEEDED, STATUS_FORBIDDEN, STATUS_NOT_FOUND};
use super::error::{ApiError, BackendError};
use crate::domain::{CertificateStatus, SslCertificate};

/// HTTP status for a create whose name is already taken.
const STATUS_CONFLICT: u16 = 409;

#[derive(Debug, Default)]
pub struct InMemoryCertificateBackend {
    certificates: DashMap<String, SslCertificate>,
    /// Number of stored certificates, reserved under the entry guard before
    /// insert so racing creates cannot overshoot the quota.
    count: AtomicUsize,
    quota: Option<usize>,
    fail_next: Mutex<Option<BackendError>>,
}

impl InMemoryCertificateBackend {
    /// Backend without a certificate quota.
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that rejects creates once `quota` certificates exist.
    pub fn with_quota(quota: usize) -> Self {
        Self { quota: Some(quota), ..Self::default() }
    }

    /// Make the next backend call, whichever it is, fail with `err`.
    pub fn fail_next(&self, err: BackendError) {
        *self.fail_next.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(err);
    }

    /// Number of stored certificates.
    pub fn len(&self) -> usize {
        self.certificates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }

    /// Mark a stored certificate as issued. Returns false if `name` is absent.
    pub fn activate(&self, name: &str, pem: impl Into<String>) -> bool {
        match self.certificates.get_mut(name) {
            Some(mut cert) => {
                cert.status = CertificateStatus::Active;
                cert.certificate = Some(pem.into());
                true
            }
            None => false,
        }
    }

    fn take_injected(&self) -> BackendResult<()> {
        let injected =
            self.fail_next.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).take();
        match injected {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn reserve_slot(&self) -> BackendResult<()> {
        let Some(quota) = self.quota else {
            self.count.fetch_add(1, Ordering::SeqCst);
            return Ok(());
        };

        self.count
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                (current < quota).then_some(current + 1)
            })
            .map(|_| ())
            .map_err(|_| {
                ApiError::new(
                    STATUS_FORBIDDEN,
                    format!("Quota 'SSL_CERTIFICATES' exceeded. Limit: {}", quota),
                )
                .with_item(REASON_QUOTA_EXCEEDED, format!("Limit: {}", quota))
                .into()
            })
    }

    fn release_slot(&self) {
        self.count.fetch_sub(1, Ordering::SeqCst);
    }
}

fn not_found(name: &str) -> BackendError {
    ApiError::new(STATUS_NOT_FOUND, format!("The resource '{}' was not found", name))
        .with_item("notFound", "")
        .into()
}

#[async_trait]
impl CertificateBackend for InMemoryCertificateBackend {
    async fn create(&self, name: &str, domains: &[String]) -> BackendResult<()> {
        self.take_injected()?;

        match self.certificates.entry(name.to_string()) {
            Entry::Occupied(_) => Err(ApiError::new(
                STATUS_CONFLICT,
                format!("The resource '{}' already exists", name),
            )
            .with_item("alreadyExists", "")
            .into()),
            Entry::Vacant(slot) => {
                self.reserve_slot()?;
                slot.insert(SslCertificate::provisioning(name, domains));
                debug!(name = %name, domains = ?domains, "Stored certificate");
                Ok(())
            }
        }
    }

    async fn delete(&self, name: &str) -> BackendResult<()> {
        self.take_injected()?;

        match self.certificates.remove(name) {
            Some(_) => {
                self.release_slot();
                debug!(name = %name, "Removed certificate");
                Ok(())
            }
            None => Err(not_found(name)),
        }
    }

    async fn exists(&self, name: &str) -> BackendResult<bool> {
        self.take_injected()?;
        Ok(self.certificates.contains_key(name))
    }

    async fn get(&self, name: &str) -> BackendResult<Option<SslCertificate>> {
        self.take_injected()?;
        Ok(self.certificates.get(name).map(|cert| cert.clone()))
    }
}
