//! SQLite implementation of the RollupRepository.
//!
//! The snapshot is a single row keyed by a well-known instance id; each
//! save overwrites it wholesale. Name lists are stored as JSON columns.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::adapters::sqlite::parse_datetime;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::TopLocations;
use crate::domain::ports::RollupRepository;

#[derive(Clone)]
pub struct SqliteRollupRepository {
    pool: SqlitePool,
}

impl SqliteRollupRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RollupRepository for SqliteRollupRepository {
    async fn save_snapshot(&self, snapshot: &TopLocations) -> DomainResult<()> {
        let origins_json = serde_json::to_string(&snapshot.origins)?;
        let destinations_json = serde_json::to_string(&snapshot.destinations)?;

        sqlx::query(
            r#"INSERT INTO top_locations (instance_id, origins, destinations, updated_at)
               VALUES (?, ?, ?, ?)
               ON CONFLICT(instance_id) DO UPDATE SET
                   origins = excluded.origins,
                   destinations = excluded.destinations,
                   updated_at = excluded.updated_at"#,
        )
        .bind(TopLocations::INSTANCE_ID)
        .bind(&origins_json)
        .bind(&destinations_json)
        .bind(snapshot.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn load_snapshot(&self) -> DomainResult<Option<TopLocations>> {
        let row: Option<SnapshotRow> =
            sqlx::query_as("SELECT * FROM top_locations WHERE instance_id = ?")
                .bind(TopLocations::INSTANCE_ID)
                .fetch_optional(&self.pool)
                .await?;

        row.map(TryInto::try_into).transpose()
    }
}

#[derive(sqlx::FromRow)]
struct SnapshotRow {
    #[allow(dead_code)]
    instance_id: String,
    origins: String,
    destinations: String,
    updated_at: String,
}

impl TryFrom<SnapshotRow> for TopLocations {
    type Error = DomainError;

    fn try_from(row: SnapshotRow) -> Result<Self, Self::Error> {
        Ok(Self {
            origins: serde_json::from_str(&row.origins)?,
            destinations: serde_json::from_str(&row.destinations)?,
            updated_at: parse_datetime(&row.updated_at)?,
        })
    }
}
