//! Lifecycle events
//!
//! The lifecycle manager reports each classified outcome through an
//! [`EventSink`]. Downstream status reporting turns these into user-visible
//! messages; `BackendError` and `TooManyCertificates` are warnings with
//! different remediation.
//!
//! ## Available Sinks
//!
//! - **TracingEventSink**: structured log record plus a counter per event
//! - **RecordingEventSink**: in-memory list, drained by the caller

pub mod recording;
pub mod sink;
pub mod tracing_sink;

pub use recording::RecordingEventSink;
pub use sink::{Event, EventReason, EventSink, EventType};
pub use tracing_sink::TracingEventSink;
