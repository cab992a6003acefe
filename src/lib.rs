//! # certplane
//!
//! Keeps a backend TLS certificate resource in step with a user-declared
//! managed certificate. This crate is the layer a reconcile loop calls once it
//! has decided what to do:
//!
//! ```text
//! Reconcile loop → naming (new names) → CertificateLifecycleManager → CertificateBackend
//!                                                  ↓
//!                                              EventSink → status reporting
//! ```
//!
//! ## Core Components
//!
//! - **CertificateLifecycleManager**: idempotent create/delete/exists/get with
//!   error classification and exactly-one-event reporting
//! - **Classification**: maps backend errors to not-found, quota-exceeded or other
//! - **RandomNameGenerator**: collision-resistant backend resource names
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use certplane::backends::InMemoryCertificateBackend;
//! use certplane::domain::ManagedCertificate;
//! use certplane::events::TracingEventSink;
//! use certplane::manager::CertificateLifecycleManager;
//! use certplane::{LifecycleConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = LifecycleConfig::from_env()?;
//!     certplane::observability::init_observability(&config.logging)?;
//!
//!     let manager = CertificateLifecycleManager::new(
//!         Arc::new(InMemoryCertificateBackend::new()),
//!         Arc::new(TracingEventSink::new()),
//!     );
//!
//!     let mcrt = ManagedCertificate::new("default", "shop").with_domains(["shop.example.com"]);
//!     let name = config.naming.generator()?.generate()?;
//!     manager.create(&name, &mcrt).await?;
//!     Ok(())
//! }
//! ```

pub mod backends;
pub mod config;
pub mod domain;
pub mod errors;
pub mod events;
pub mod manager;
pub mod naming;
pub mod observability;

// Re-export commonly used types and traits
pub use backends::{BackendError, CertificateBackend, Classification};
pub use config::LifecycleConfig;
pub use errors::{CertplaneError, Result};
pub use events::EventSink;
pub use manager::CertificateLifecycleManager;
pub use naming::{random_name, RandomNameGenerator};

/// Library version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
