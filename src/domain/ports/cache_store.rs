//! Cache store port.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from a cache backend.
///
/// These never cross a service boundary: callers must treat any cache
/// failure as a forced miss (reads) or a no-op (writes/invalidations) and
/// carry on against the authoritative store.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache backend unavailable: {0}")]
    Backend(String),
}

/// Best-effort key/value accelerator with explicit invalidation.
///
/// Values are opaque bytes; callers serialize at the call site. The cache
/// is never a source of truth — every entry must be recomputable from the
/// owning repository.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Look up a key. `Ok(None)` is a miss.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Store a value. Without a TTL the entry lives until explicitly
    /// invalidated.
    async fn set(&self, key: &str, value: Vec<u8>, ttl: Option<Duration>) -> Result<(), CacheError>;

    /// Remove a key. Removing an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<(), CacheError>;
}
