//! Port trait definitions (Hexagonal Architecture)
//!
//! Async trait interfaces that adapters must implement:
//! - `CacheStore`: best-effort key/value cache with explicit invalidation
//! - `LocationRepository`: persistence for the location reference set
//! - `TripRepository`: persistence and queries for trips
//! - `RollupRepository`: persistence for the singleton rollup snapshot
//!
//! These traits keep the services independent of specific storage and
//! cache backends.

pub mod cache_store;
pub mod location_repository;
pub mod rollup_repository;
pub mod trip_repository;

pub use cache_store::{CacheError, CacheStore};
pub use location_repository::LocationRepository;
pub use rollup_repository::RollupRepository;
pub use trip_repository::{TripRepository, TripStream};
