use std::time::Duration;

use async_trait::async_trait;

use starport::domain::ports::cache_store::{CacheError, CacheStore};

/// Cache store whose backend is always unavailable. Used to verify that
/// cache failures degrade to the recompute path instead of failing callers.
pub struct UnavailableCacheStore;

#[async_trait]
impl CacheStore for UnavailableCacheStore {
    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Err(CacheError::Backend("connection refused".to_string()))
    }

    async fn set(
        &self,
        _key: &str,
        _value: Vec<u8>,
        _ttl: Option<Duration>,
    ) -> Result<(), CacheError> {
        Err(CacheError::Backend("connection refused".to_string()))
    }

    async fn delete(&self, _key: &str) -> Result<(), CacheError> {
        Err(CacheError::Backend("connection refused".to_string()))
    }
}
