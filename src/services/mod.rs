pub mod location_directory;
pub mod rollup_daemon;
pub mod rollup_engine;
pub mod trip_service;

pub use location_directory::{LocationDirectory, ALL_LOCATIONS_CACHE_KEY};
pub use rollup_daemon::{DaemonHandle, DaemonStatus, RollupDaemon, RollupDaemonConfig, StopReason};
pub use rollup_engine::RollupEngine;
pub use trip_service::{TripService, DEFAULT_SEARCH_LIMIT};
