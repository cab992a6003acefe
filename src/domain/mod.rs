//! Domain layer
//!
//! Pure certificate entities with no backend or transport dependencies.

pub mod certificate;

pub use certificate::{CertificateStatus, ManagedCertificate, ObjectRef, SslCertificate};
