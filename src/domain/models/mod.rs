pub mod config;
pub mod location;
pub mod rollup;
pub mod trip;

pub use config::{CacheConfig, Config, DatabaseConfig, LoggingConfig, RollupConfig};
pub use location::{Location, LocationSaveParams};
pub use rollup::TopLocations;
pub use trip::{SearchEcho, Trip, TripFilter, TripSaveParams};
