//! In-memory caching layer.
//!
//! Uses `moka` for concurrent caching behind the `CacheStore` port, with
//! per-entry TTL support. Entries without a TTL live until explicitly
//! invalidated.

pub mod moka_store;

pub use moka_store::MokaCacheStore;
