use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::Location;

/// Repository port for the location reference set.
///
/// Locations are keyed by name; `upsert` overwrites attributes of an
/// existing name. This port knows nothing about caching — invalidation is
/// the `LocationDirectory` service's job.
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Insert or overwrite a location keyed by its name.
    async fn upsert(&self, location: &Location) -> DomainResult<()>;

    /// Get a location by name.
    async fn get(&self, name: &str) -> DomainResult<Option<Location>>;

    /// Full scan of every location, ordered by name.
    async fn list_all(&self) -> DomainResult<Vec<Location>>;

    /// Delete a location by name. Fails with `LocationNotFound` when absent.
    async fn delete(&self, name: &str) -> DomainResult<()>;
}
