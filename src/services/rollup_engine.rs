//! Windowed top-K rollup of trip frequency by location.
//!
//! A run scans every trip strictly newer than `today - window_days`,
//! counts how often each location appears as an origin and as a
//! destination, and overwrites the singleton snapshot with the top `limit`
//! names of each table. Counts are not persisted.
//!
//! The scan is read-only and races benignly with concurrent trip
//! creation: a trip inserted mid-scan may or may not be counted.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, Utc};
use futures::StreamExt;
use tracing::info;

use crate::domain::errors::DomainResult;
use crate::domain::models::{RollupConfig, TopLocations};
use crate::domain::ports::{RollupRepository, TripRepository};

pub struct RollupEngine {
    trips: Arc<dyn TripRepository>,
    snapshots: Arc<dyn RollupRepository>,
    config: RollupConfig,
}

impl RollupEngine {
    pub fn new(
        trips: Arc<dyn TripRepository>,
        snapshots: Arc<dyn RollupRepository>,
        config: RollupConfig,
    ) -> Self {
        Self {
            trips,
            snapshots,
            config,
        }
    }

    /// Run one rollup pass and overwrite the snapshot.
    ///
    /// Either the whole run fails or the whole snapshot is replaced; there
    /// is no partial merge with the previous snapshot.
    pub async fn run(&self) -> DomainResult<TopLocations> {
        let cutoff = Utc::now().date_naive() - Duration::days(self.config.window_days);

        let mut origins = FrequencyTable::default();
        let mut destinations = FrequencyTable::default();

        {
            let mut scan = self.trips.scan_since(cutoff);
            while let Some(trip) = scan.next().await {
                let trip = trip?;
                origins.increment(&trip.origin);
                destinations.increment(&trip.destiny);
            }
        }

        let snapshot = TopLocations::new(
            origins.top(self.config.limit),
            destinations.top(self.config.limit),
        );
        self.snapshots.save_snapshot(&snapshot).await?;

        info!(
            window_days = self.config.window_days,
            limit = self.config.limit,
            origins = snapshot.origins.len(),
            destinations = snapshot.destinations.len(),
            "top locations snapshot saved"
        );

        Ok(snapshot)
    }

    /// The current snapshot, if a rollup has ever run.
    pub async fn current_snapshot(&self) -> DomainResult<Option<TopLocations>> {
        self.snapshots.load_snapshot().await
    }
}

/// Frequency table with deterministic ordering: count descending, ties
/// broken by first appearance.
#[derive(Default)]
struct FrequencyTable {
    counts: HashMap<String, Entry>,
    next_rank: usize,
}

struct Entry {
    count: u64,
    first_seen: usize,
}

impl FrequencyTable {
    fn increment(&mut self, name: &str) {
        let rank = self.next_rank;
        let entry = self
            .counts
            .entry(name.to_string())
            .or_insert_with(|| {
                Entry {
                    count: 0,
                    first_seen: rank,
                }
            });
        if entry.count == 0 {
            self.next_rank += 1;
        }
        entry.count += 1;
    }

    fn top(&self, limit: usize) -> Vec<String> {
        let mut entries: Vec<_> = self.counts.iter().collect();
        entries.sort_by(|(_, a), (_, b)| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.first_seen.cmp(&b.first_seen))
        });
        entries
            .into_iter()
            .take(limit)
            .map(|(name, _)| name.clone())
            .collect()
    }
}
