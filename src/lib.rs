//! Starport - trip-booking directory
//!
//! Starport keeps a directory of locations, scheduled trips between them,
//! and a periodically recomputed snapshot of the most popular routes.
//!
//! # Architecture
//!
//! The crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): models, port traits and typed errors
//! - **Adapters** (`adapters`): SQLite repositories and the moka cache
//! - **Service Layer** (`services`): the location directory's cache-aside
//!   read path, trip creation/search, and the rollup engine and daemon
//! - **Infrastructure** (`infrastructure`): configuration and wiring
//! - **CLI Layer** (`cli`): command-line interface
//!
//! The location set is read through a cache that every write invalidates;
//! trip search is an all-or-nothing exact filter with a most-recent
//! fallback; the rollup job periodically aggregates top origins and
//! destinations over a trailing window into a singleton snapshot.

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    Config, Location, SearchEcho, TopLocations, Trip, TripFilter, TripSaveParams,
};
pub use domain::ports::{CacheStore, LocationRepository, RollupRepository, TripRepository};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::setup::AppContext;
pub use services::{LocationDirectory, RollupEngine, TripService};
