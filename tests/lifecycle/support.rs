//! Shared fakes and fixtures for lifecycle tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use certplane::backends::{ApiError, BackendError, BackendResult, CertificateBackend};
use certplane::domain::{CertificateStatus, ManagedCertificate, SslCertificate};
use certplane::events::RecordingEventSink;
use certplane::CertificateLifecycleManager;

/// Backend that answers every call with one scripted outcome and counts calls.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    pub err: Option<BackendError>,
    pub exists: bool,
    pub certificate: Option<SslCertificate>,
    pub calls: AtomicUsize,
}

impl ScriptedBackend {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn failing(err: BackendError) -> Self {
        Self { err: Some(err), ..Self::default() }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn answer<T>(&self, value: T) -> BackendResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.err {
            Some(err) => Err(err.clone()),
            None => Ok(value),
        }
    }
}

#[async_trait]
impl CertificateBackend for ScriptedBackend {
    async fn create(&self, _name: &str, _domains: &[String]) -> BackendResult<()> {
        self.answer(())
    }

    async fn delete(&self, _name: &str) -> BackendResult<()> {
        self.answer(())
    }

    async fn exists(&self, _name: &str) -> BackendResult<bool> {
        self.answer(self.exists)
    }

    async fn get(&self, _name: &str) -> BackendResult<Option<SslCertificate>> {
        self.answer(self.certificate.clone())
    }
}

/// Manager wired to `backend` and a fresh recording sink.
pub fn manager_with<B>(backend: Arc<B>) -> (CertificateLifecycleManager, Arc<RecordingEventSink>)
where
    B: CertificateBackend + 'static,
{
    let events = Arc::new(RecordingEventSink::new());
    (CertificateLifecycleManager::new(backend, events.clone()), events)
}

pub fn mcrt() -> ManagedCertificate {
    ManagedCertificate::new("default", "shop")
        .with_domains(["shop.example.com", "www.shop.example.com"])
}

pub fn normal() -> BackendError {
    BackendError::other("normal error")
}

pub fn quota_exceeded() -> BackendError {
    ApiError::new(403, "Quota 'SSL_CERTIFICATES' exceeded. Limit: 10.0 globally.")
        .with_item("quotaExceeded", "Limit: 10.0")
        .into()
}

pub fn not_found() -> BackendError {
    ApiError::new(404, "The resource was not found").into()
}

pub fn issued(name: &str) -> SslCertificate {
    SslCertificate {
        name: name.to_string(),
        domains: vec!["shop.example.com".to_string()],
        status: CertificateStatus::Active,
        certificate: Some("-----BEGIN CERTIFICATE-----".to_string()),
        created_at: chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
    }
}
