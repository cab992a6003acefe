//! Event sink that renders events as structured log records.

use tracing::{info, warn};

use super::sink::{Event, EventSink, EventType};
use crate::backends::BackendError;
use crate::domain::ManagedCertificate;
use crate::observability::EventMetrics;

/// Writes each event as a `tracing` record and counts it.
///
/// Warning events are logged at `warn`, Normal events at `info`. Every event
/// increments `certificate_events_total{reason,type}`.
#[derive(Debug, Clone, Default)]
pub struct TracingEventSink {
    metrics: EventMetrics,
}

impl TracingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn emit(&self, event: Event) {
        self.metrics.record_event(event.reason, event.event_type);

        match event.event_type {
            EventType::Warning => warn!(
                reason = %event.reason,
                object = %event.object,
                detail = %event.message,
                "Certificate event"
            ),
            EventType::Normal => info!(
                reason = %event.reason,
                object = %event.object,
                detail = %event.message,
                "Certificate event"
            ),
        }
    }
}

impl EventSink for TracingEventSink {
    fn backend_error(&self, desired: &ManagedCertificate, err: &BackendError) {
        self.emit(Event::backend_error(desired, err));
    }

    fn create(&self, desired: &ManagedCertificate, name: &str) {
        self.emit(Event::create(desired, name));
    }

    fn delete(&self, desired: &ManagedCertificate, name: &str) {
        self.emit(Event::delete(desired, name));
    }

    fn too_many_certificates(&self, desired: &ManagedCertificate, err: &BackendError) {
        self.emit(Event::too_many_certificates(desired, err));
    }
}
