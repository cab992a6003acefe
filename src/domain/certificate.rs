//! Certificate domain types
//!
//! - **ManagedCertificate**: the desired certificate declared by a user
//! - **SslCertificate**: the certificate resource held by the backend
//! - **ObjectRef**: the `namespace/name` key events are attributed to

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reference to the desired certificate an event is attributed to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectRef {
    pub namespace: String,
    pub name: String,
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// User-declared intent to have a backend certificate covering a set of domains.
///
/// The lifecycle manager only forwards `domains` to the backend on create and
/// otherwise treats this value as an attribution payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedCertificate {
    pub namespace: String,
    pub name: String,
    #[serde(default)]
    pub domains: Vec<String>,
}

impl ManagedCertificate {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self { namespace: namespace.into(), name: name.into(), domains: Vec::new() }
    }

    /// Builder-style domain list
    pub fn with_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domains = domains.into_iter().map(Into::into).collect();
        self
    }

    pub fn object_ref(&self) -> ObjectRef {
        ObjectRef { namespace: self.namespace.clone(), name: self.name.clone() }
    }
}

/// Provisioning state reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateStatus {
    Provisioning,
    Active,
    Failed,
}

impl CertificateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Provisioning => "provisioning",
            Self::Active => "active",
            Self::Failed => "failed",
        }
    }
}

impl FromStr for CertificateStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "provisioning" => Ok(Self::Provisioning),
            "active" => Ok(Self::Active),
            "failed" => Ok(Self::Failed),
            _ => Err(format!("Unknown certificate status: {}", s)),
        }
    }
}

impl fmt::Display for CertificateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Certificate resource as stored by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SslCertificate {
    /// Unique backend resource name
    pub name: String,
    /// Domains the certificate covers
    pub domains: Vec<String>,
    pub status: CertificateStatus,
    /// PEM-encoded certificate, once issued
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SslCertificate {
    /// A freshly requested certificate that the backend has not issued yet
    pub fn provisioning(name: impl Into<String>, domains: &[String]) -> Self {
        Self {
            name: name.into(),
            domains: domains.to_vec(),
            status: CertificateStatus::Provisioning,
            certificate: None,
            created_at: Utc::now(),
        }
    }
}
