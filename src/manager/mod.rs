//! Certificate lifecycle manager
//!
//! Wraps the four backend operations with error classification and event
//! emission. Each call reaches the backend exactly once and emits at most one
//! event. Errors come back to the caller exactly as the backend returned them.
//!
//! Create always runs on behalf of a managed certificate. Delete, Exists and
//! Get also serve orphan cleanup, where there is no owner; with no owner
//! there is nothing to attribute an event to, so none is emitted.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use certplane::{
//!     backends::InMemoryCertificateBackend, domain::ManagedCertificate,
//!     events::TracingEventSink, manager::CertificateLifecycleManager, naming::random_name,
//! };
//!
//! let manager = CertificateLifecycleManager::new(
//!     Arc::new(InMemoryCertificateBackend::new()),
//!     Arc::new(TracingEventSink::new()),
//! );
//!
//! let mcrt = ManagedCertificate::new("default", "shop").with_domains(["shop.example.com"]);
//! let name = random_name()?;
//! manager.create(&name, &mcrt).await?;
//! ```

use std::sync::Arc;
use tracing::{debug, warn, Instrument};

use crate::backends::{classify_result, BackendError, CertificateBackend, Classification};
use crate::domain::{ManagedCertificate, SslCertificate};
use crate::events::EventSink;
use crate::lifecycle_span;
use crate::observability::EventMetrics;

/// Stateless front for a certificate backend and an event sink.
///
/// Cloning is cheap and clones share the same collaborators.
#[derive(Clone)]
pub struct CertificateLifecycleManager {
    backend: Arc<dyn CertificateBackend>,
    events: Arc<dyn EventSink>,
    metrics: EventMetrics,
}

impl std::fmt::Debug for CertificateLifecycleManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateLifecycleManager")
            .field("backend", &self.backend)
            .field("events", &"[EventSink]")
            .finish()
    }
}

impl CertificateLifecycleManager {
    pub fn new(backend: Arc<dyn CertificateBackend>, events: Arc<dyn EventSink>) -> Self {
        Self { backend, events, metrics: EventMetrics::new() }
    }

    /// Create certificate `name` for `desired`.
    ///
    /// Emits `TooManyCertificates` when the backend is out of quota,
    /// `BackendError` on any other failure, and `Create` on success.
    pub async fn create(
        &self,
        name: &str,
        desired: &ManagedCertificate,
    ) -> Result<(), BackendError> {
        let span = lifecycle_span!("create", name, owner = desired.object_ref());

        async {
            let result = self.backend.create(name, &desired.domains).await;
            let outcome = self.observe("create", &result);

            match result {
                Ok(()) => {
                    debug!(domains = ?desired.domains, "Created certificate");
                    self.events.create(desired, name);
                    Ok(())
                }
                Err(err) if outcome == Classification::QuotaExceeded => {
                    warn!(error = %err, "Certificate quota exceeded");
                    self.events.too_many_certificates(desired, &err);
                    Err(err)
                }
                Err(err) => {
                    warn!(error = %err, "Failed to create certificate");
                    self.events.backend_error(desired, &err);
                    Err(err)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Delete certificate `name`.
    ///
    /// Deleting a certificate that is already gone succeeds without an event.
    /// `Delete` and `BackendError` events are only emitted when `desired` is
    /// present.
    pub async fn delete(
        &self,
        name: &str,
        desired: Option<&ManagedCertificate>,
    ) -> Result<(), BackendError> {
        let span = self.span("delete", name, desired);

        async {
            let result = self.backend.delete(name).await;
            let outcome = self.observe("delete", &result);

            match result {
                Ok(()) => {
                    debug!("Deleted certificate");
                    if let Some(desired) = desired {
                        self.events.delete(desired, name);
                    }
                    Ok(())
                }
                Err(_) if outcome == Classification::NotFound => {
                    debug!("Certificate already absent");
                    Ok(())
                }
                Err(err) => {
                    warn!(error = %err, "Failed to delete certificate");
                    self.report_backend_error(desired, &err);
                    Err(err)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Whether certificate `name` exists.
    ///
    /// On error no existence answer is returned; `BackendError` is emitted
    /// when `desired` is present.
    pub async fn exists(
        &self,
        name: &str,
        desired: Option<&ManagedCertificate>,
    ) -> Result<bool, BackendError> {
        let span = self.span("exists", name, desired);

        async {
            let result = self.backend.exists(name).await;
            self.observe("exists", &result);

            result.inspect_err(|err| {
                warn!(error = %err, "Failed to check certificate existence");
                self.report_backend_error(desired, err);
            })
        }
        .instrument(span)
        .await
    }

    /// Fetch certificate `name`; `Ok(None)` when the backend reports none.
    ///
    /// On error `BackendError` is emitted when `desired` is present.
    pub async fn get(
        &self,
        name: &str,
        desired: Option<&ManagedCertificate>,
    ) -> Result<Option<SslCertificate>, BackendError> {
        let span = self.span("get", name, desired);

        async {
            let result = self.backend.get(name).await;
            self.observe("get", &result);

            result.inspect_err(|err| {
                warn!(error = %err, "Failed to get certificate");
                self.report_backend_error(desired, err);
            })
        }
        .instrument(span)
        .await
    }

    fn span(
        &self,
        operation: &str,
        name: &str,
        desired: Option<&ManagedCertificate>,
    ) -> tracing::Span {
        match desired {
            Some(desired) => lifecycle_span!(operation, name, owner = desired.object_ref()),
            None => lifecycle_span!(operation, name),
        }
    }

    fn observe<T>(&self, operation: &str, result: &Result<T, BackendError>) -> Classification {
        let outcome = classify_result(result);
        self.metrics.record_backend_call(operation, outcome);
        outcome
    }

    fn report_backend_error(&self, desired: Option<&ManagedCertificate>, err: &BackendError) {
        if let Some(desired) = desired {
            self.events.backend_error(desired, err);
        }
    }
}
