//! Domain layer for the starport trip directory.
//!
//! Core business models, port traits and typed errors. No I/O lives here.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult};
