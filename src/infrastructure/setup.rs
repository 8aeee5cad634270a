//! Composition root.
//!
//! Builds the process-wide dependencies once — connection pool, migrations,
//! cache client — and wires them into the services. The cache client is an
//! explicitly injected dependency with its lifecycle owned here, not a
//! hidden global.

use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::SqlitePool;

use crate::adapters::cache::MokaCacheStore;
use crate::adapters::sqlite::{
    all_embedded_migrations, create_pool, Migrator, PoolConfig, SqliteLocationRepository,
    SqliteRollupRepository, SqliteTripRepository,
};
use crate::domain::models::Config;
use crate::services::{LocationDirectory, RollupEngine, TripService};

/// Fully wired application services sharing one pool and one cache.
pub struct AppContext {
    pub pool: SqlitePool,
    pub locations: Arc<LocationDirectory>,
    pub trips: Arc<TripService>,
    pub rollup: Arc<RollupEngine>,
}

impl AppContext {
    /// Connect, migrate and wire everything from configuration.
    pub async fn initialize(config: &Config) -> Result<Self> {
        let database_url = format!("sqlite:{}", config.database.path);
        let pool = create_pool(&database_url, Some(PoolConfig::from(&config.database)))
            .await
            .context("Failed to create database pool")?;

        let migrator = Migrator::new(pool.clone());
        migrator
            .run_embedded_migrations(all_embedded_migrations())
            .await
            .context("Failed to run database migrations")?;

        Ok(Self::wire(pool, config))
    }

    /// Wire services onto an existing (already migrated) pool.
    pub fn wire(pool: SqlitePool, config: &Config) -> Self {
        let cache = Arc::new(MokaCacheStore::with_capacity(config.cache.max_capacity));

        let location_repo = Arc::new(SqliteLocationRepository::new(pool.clone()));
        let trip_repo = Arc::new(SqliteTripRepository::new(pool.clone()));
        let rollup_repo = Arc::new(SqliteRollupRepository::new(pool.clone()));

        let locations = Arc::new(LocationDirectory::new(location_repo, cache));
        let trips = Arc::new(TripService::new(trip_repo.clone()));
        let rollup = Arc::new(RollupEngine::new(
            trip_repo,
            rollup_repo,
            config.rollup.clone(),
        ));

        Self {
            pool,
            locations,
            trips,
            rollup,
        }
    }
}
