//! Infrastructure layer module
//!
//! Configuration management and the composition root that wires adapters
//! into services. Adapter implementations satisfying the domain ports live
//! under `crate::adapters`.

pub mod config;
pub mod logging;
pub mod setup;

pub use config::{ConfigError, ConfigLoader};
pub use setup::AppContext;
