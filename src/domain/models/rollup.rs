//! Rollup snapshot model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The singleton snapshot of the most popular routes.
///
/// There is exactly one live snapshot at any time; each rollup run fully
/// replaces it. Only location names are kept, ordered by descending
/// frequency — the counts themselves are not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopLocations {
    /// Most frequent origins, at most top-K entries.
    pub origins: Vec<String>,
    /// Most frequent destinations, at most top-K entries.
    pub destinations: Vec<String>,
    /// When this snapshot was computed.
    pub updated_at: DateTime<Utc>,
}

impl TopLocations {
    /// Well-known id of the single live snapshot row.
    pub const INSTANCE_ID: &'static str = "1";

    pub fn new(origins: Vec<String>, destinations: Vec<String>) -> Self {
        Self {
            origins,
            destinations,
            updated_at: Utc::now(),
        }
    }
}
