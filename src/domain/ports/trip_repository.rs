use async_trait::async_trait;
use chrono::NaiveDate;
use futures::stream::BoxStream;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Trip, TripSaveParams};

/// A lazy, single-pass stream of trips. Not restartable: a fresh call
/// re-scans.
pub type TripStream<'a> = BoxStream<'a, DomainResult<Trip>>;

/// Repository port for trip persistence and queries.
#[async_trait]
pub trait TripRepository: Send + Sync {
    /// Persist a new trip, assigning its id and `created` timestamp.
    /// Returns the stored trip.
    async fn insert(&self, params: &TripSaveParams) -> DomainResult<Trip>;

    /// Get a trip by id.
    async fn get(&self, id: i64) -> DomainResult<Option<Trip>>;

    /// Trips matching origin, destiny and date exactly, ordered by date
    /// descending then id descending, at most `limit`.
    async fn find_exact(
        &self,
        origin: &str,
        destiny: &str,
        date: NaiveDate,
        limit: usize,
    ) -> DomainResult<Vec<Trip>>;

    /// The `limit` most recent trips overall, ordered by date descending
    /// then id descending.
    async fn list_recent(&self, limit: usize) -> DomainResult<Vec<Trip>>;

    /// Stream every trip with `date > cutoff` (strict), single pass.
    fn scan_since(&self, cutoff: NaiveDate) -> TripStream<'_>;
}
