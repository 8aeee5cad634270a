//! Moka-backed implementation of the `CacheStore` port.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::future::Cache;
use moka::Expiry;

use crate::domain::ports::{CacheError, CacheStore};

/// Default maximum number of cached entries.
const DEFAULT_MAX_CAPACITY: u64 = 1024;

#[derive(Clone)]
struct CacheEntry {
    value: Arc<Vec<u8>>,
    ttl: Option<Duration>,
}

/// Expires entries according to the TTL recorded at `set` time. Entries
/// stored without a TTL never expire on their own.
struct PerEntryExpiry;

impl Expiry<String, CacheEntry> for PerEntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        entry: &CacheEntry,
        _created_at: Instant,
    ) -> Option<Duration> {
        entry.ttl
    }
}

/// In-process cache store.
///
/// The process-wide instance is owned by the composition root and injected
/// into the services that need it. Being in-process it cannot actually
/// lose its backend, but it honors the port's degrade-to-miss contract all
/// the same.
pub struct MokaCacheStore {
    entries: Cache<String, CacheEntry>,
}

impl MokaCacheStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_CAPACITY)
    }

    pub fn with_capacity(max_capacity: u64) -> Self {
        let entries = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(PerEntryExpiry)
            .build();

        Self { entries }
    }

    /// Number of live entries; pending maintenance may lag.
    pub fn entry_count(&self) -> u64 {
        self.entries.entry_count()
    }
}

impl Default for MokaCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for MokaCacheStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Ok(self.entries.get(key).await.map(|e| (*e.value).clone()))
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Option<Duration>) -> Result<(), CacheError> {
        let entry = CacheEntry {
            value: Arc::new(value),
            ttl,
        };
        self.entries.insert(key.to_string(), entry).await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.entries.invalidate(key).await;
        Ok(())
    }
}
