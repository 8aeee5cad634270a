use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::TopLocations;

/// Repository port for the singleton rollup snapshot.
///
/// The rollup engine is the only writer; reads are shared.
#[async_trait]
pub trait RollupRepository: Send + Sync {
    /// Overwrite the live snapshot. Each run fully replaces the previous
    /// one — there is no merge.
    async fn save_snapshot(&self, snapshot: &TopLocations) -> DomainResult<()>;

    /// Load the live snapshot, if a rollup has ever run.
    async fn load_snapshot(&self) -> DomainResult<Option<TopLocations>>;
}
