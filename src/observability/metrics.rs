//! # Metrics Collection
//!
//! Counters for lifecycle events and backend call outcomes, recorded through
//! the `metrics` facade. Installing an exporter is left to the embedding
//! process; without one the calls are no-ops.

use metrics::{counter, describe_counter, Unit};

use crate::backends::Classification;
use crate::events::{EventReason, EventType};

pub const EVENTS_TOTAL: &str = "certificate_events_total";
pub const BACKEND_CALLS_TOTAL: &str = "certificate_backend_calls_total";

/// Register metric descriptions with the installed recorder.
pub fn describe_metrics() {
    describe_counter!(EVENTS_TOTAL, Unit::Count, "Lifecycle events emitted, by reason and type");
    describe_counter!(
        BACKEND_CALLS_TOTAL,
        Unit::Count,
        "Certificate backend calls, by operation and error classification"
    );
}

#[derive(Debug, Clone, Default)]
pub struct EventMetrics;

impl EventMetrics {
    pub fn new() -> Self {
        Self
    }

    /// Count one emitted event
    pub fn record_event(&self, reason: EventReason, event_type: EventType) {
        let labels =
            [("reason", reason.as_str().to_string()), ("type", event_type.as_str().to_string())];
        counter!(EVENTS_TOTAL, &labels).increment(1);
    }

    /// Count one backend call and how its outcome classified
    pub fn record_backend_call(&self, operation: &str, outcome: Classification) {
        let labels =
            [("operation", operation.to_string()), ("outcome", outcome.as_str().to_string())];
        counter!(BACKEND_CALLS_TOTAL, &labels).increment(1);
    }
}
