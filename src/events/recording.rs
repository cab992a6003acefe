//! Event sink that keeps every event in memory.

use std::sync::{Mutex, MutexGuard};

use super::sink::{Event, EventReason, EventSink};
use crate::backends::BackendError;
use crate::domain::ManagedCertificate;

/// Collects events in arrival order.
///
/// Useful in tests and for callers that drain events into a status writer on
/// their own schedule.
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<Event>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Event>> {
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, event: Event) {
        self.lock().push(event);
    }

    /// Snapshot of all recorded events.
    pub fn events(&self) -> Vec<Event> {
        self.lock().clone()
    }

    /// Number of recorded events with `reason`.
    pub fn count(&self, reason: EventReason) -> usize {
        self.lock().iter().filter(|event| event.reason == reason).count()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Remove and return all recorded events.
    pub fn drain(&self) -> Vec<Event> {
        std::mem::take(&mut *self.lock())
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl EventSink for RecordingEventSink {
    fn backend_error(&self, desired: &ManagedCertificate, err: &BackendError) {
        self.record(Event::backend_error(desired, err));
    }

    fn create(&self, desired: &ManagedCertificate, name: &str) {
        self.record(Event::create(desired, name));
    }

    fn delete(&self, desired: &ManagedCertificate, name: &str) {
        self.record(Event::delete(desired, name));
    }

    fn too_many_certificates(&self, desired: &ManagedCertificate, err: &BackendError) {
        self.record(Event::too_many_certificates(desired, err));
    }
}
