//! Location directory with a cache-aside read path.
//!
//! Locations are read far more often than they change, so the full set is
//! kept under a single cache key with no TTL. Every write and delete
//! invalidates that key after the mutation commits; the next `get_all`
//! repopulates it from a full repository scan.
//!
//! The cache is a best-effort accelerator only. Any cache failure is
//! logged and degraded — a failed read is a forced miss, a failed
//! invalidation or populate is a no-op — and never fails the caller.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::errors::DomainResult;
use crate::domain::models::{Location, LocationSaveParams};
use crate::domain::ports::{CacheStore, LocationRepository};

/// Cache key holding the serialized full location set.
pub const ALL_LOCATIONS_CACHE_KEY: &str = "all_locations";

pub struct LocationDirectory {
    locations: Arc<dyn LocationRepository>,
    cache: Arc<dyn CacheStore>,
}

impl LocationDirectory {
    pub fn new(locations: Arc<dyn LocationRepository>, cache: Arc<dyn CacheStore>) -> Self {
        Self { locations, cache }
    }

    /// Save a location from form parameters, overwriting any existing
    /// location with the same name.
    ///
    /// The parent reference is resolved by name without checking that the
    /// parent exists. On successful commit the `all_locations` cache entry
    /// is invalidated unconditionally.
    pub async fn save(&self, params: &HashMap<String, String>) -> DomainResult<Location> {
        let parsed = LocationSaveParams::from_params(params)?;
        let location = Location {
            name: parsed.name,
            parent_location: parsed.parent,
        };

        self.locations.upsert(&location).await?;
        self.invalidate_all().await;

        Ok(location)
    }

    /// Delete a location by name. Rare, but the invalidation contract is
    /// the same as for saves.
    pub async fn delete(&self, name: &str) -> DomainResult<()> {
        self.locations.delete(name).await?;
        self.invalidate_all().await;
        Ok(())
    }

    /// All locations, cache-aside.
    ///
    /// A hit returns the cached set verbatim. A miss (including a cache
    /// error or an undecodable payload) falls back to a full scan, which
    /// then repopulates the cache with no TTL.
    ///
    /// A scan already in flight when a concurrent write invalidates the
    /// key may still return (and cache) a stale snapshot; the only
    /// guarantee is invalidate-after-commit.
    pub async fn get_all(&self) -> DomainResult<Vec<Location>> {
        match self.cache.get(ALL_LOCATIONS_CACHE_KEY).await {
            Ok(Some(bytes)) => match serde_json::from_slice::<Vec<Location>>(&bytes) {
                Ok(cached) => return Ok(cached),
                Err(error) => {
                    warn!(%error, "discarding undecodable cached locations");
                }
            },
            Ok(None) => {}
            Err(error) => {
                warn!(%error, "location cache read failed, falling back to scan");
            }
        }

        let locations = self.locations.list_all().await?;

        match serde_json::to_vec(&locations) {
            Ok(bytes) => {
                if let Err(error) = self.cache.set(ALL_LOCATIONS_CACHE_KEY, bytes, None).await {
                    warn!(%error, "failed to populate location cache");
                }
            }
            Err(error) => {
                warn!(%error, "failed to serialize locations for cache");
            }
        }
        info!(count = locations.len(), "locations saved to cache");

        Ok(locations)
    }

    async fn invalidate_all(&self) {
        info!("removing locations from cache");
        if let Err(error) = self.cache.delete(ALL_LOCATIONS_CACHE_KEY).await {
            warn!(%error, "location cache invalidation failed");
        }
    }
}
