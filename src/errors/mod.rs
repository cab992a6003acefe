//! # Error Handling
//!
//! Error types shared across certplane. Backend and naming failures keep
//! their own types (see [`crate::backend::BackendError`] and
//! [`crate::naming::NameError`]) and convert into [`CertplaneError`] at the
//! caller boundary.

mod types;

pub use types::{CertplaneError, Result};
