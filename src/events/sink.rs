//! Event sink trait and event records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::backends::BackendError;
use crate::domain::{ManagedCertificate, ObjectRef};

/// Severity of an event, mirroring the Normal/Warning split of cluster events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    Normal,
    Warning,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Warning => "Warning",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The four outcomes a lifecycle operation can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventReason {
    BackendError,
    Create,
    Delete,
    TooManyCertificates,
}

impl EventReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BackendError => "BackendError",
            Self::Create => "Create",
            Self::Delete => "Delete",
            Self::TooManyCertificates => "TooManyCertificates",
        }
    }

    pub fn event_type(&self) -> EventType {
        match self {
            Self::BackendError | Self::TooManyCertificates => EventType::Warning,
            Self::Create | Self::Delete => EventType::Normal,
        }
    }
}

impl FromStr for EventReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BackendError" => Ok(Self::BackendError),
            "Create" => Ok(Self::Create),
            "Delete" => Ok(Self::Delete),
            "TooManyCertificates" => Ok(Self::TooManyCertificates),
            _ => Err(format!("Unknown event reason: {}", s)),
        }
    }
}

impl fmt::Display for EventReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A rendered event attributed to a managed certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub reason: EventReason,
    pub event_type: EventType,
    pub object: ObjectRef,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Event {
    pub fn new(reason: EventReason, desired: &ManagedCertificate, message: String) -> Self {
        Self {
            reason,
            event_type: reason.event_type(),
            object: desired.object_ref(),
            message,
            timestamp: Utc::now(),
        }
    }

    pub fn backend_error(desired: &ManagedCertificate, err: &BackendError) -> Self {
        Self::new(EventReason::BackendError, desired, err.to_string())
    }

    pub fn create(desired: &ManagedCertificate, name: &str) -> Self {
        Self::new(EventReason::Create, desired, format!("Create SslCertificate {}", name))
    }

    pub fn delete(desired: &ManagedCertificate, name: &str) -> Self {
        Self::new(EventReason::Delete, desired, format!("Delete SslCertificate {}", name))
    }

    pub fn too_many_certificates(desired: &ManagedCertificate, err: &BackendError) -> Self {
        Self::new(
            EventReason::TooManyCertificates,
            desired,
            format!("Too many certificates: {}", err),
        )
    }
}

/// Notification boundary for lifecycle outcomes.
///
/// Calls are synchronous and fire-and-forget. Implementations must return
/// quickly (record or enqueue, never wait on I/O) and be safe to call from
/// many tasks at once.
pub trait EventSink: Send + Sync {
    /// A backend call failed for a reason other than quota.
    fn backend_error(&self, desired: &ManagedCertificate, err: &BackendError);

    /// Certificate `name` was created for `desired`.
    fn create(&self, desired: &ManagedCertificate, name: &str);

    /// Certificate `name` belonging to `desired` was deleted.
    fn delete(&self, desired: &ManagedCertificate, name: &str);

    /// The backend rejected a create because certificate quota is exhausted.
    fn too_many_certificates(&self, desired: &ManagedCertificate, err: &BackendError);
}
