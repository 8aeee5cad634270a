//! SQLite implementation of the LocationRepository.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::Location;
use crate::domain::ports::LocationRepository;

#[derive(Clone)]
pub struct SqliteLocationRepository {
    pool: SqlitePool,
}

impl SqliteLocationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationRepository for SqliteLocationRepository {
    async fn upsert(&self, location: &Location) -> DomainResult<()> {
        sqlx::query(
            r#"INSERT INTO locations (name, parent_location) VALUES (?, ?)
               ON CONFLICT(name) DO UPDATE SET parent_location = excluded.parent_location"#,
        )
        .bind(&location.name)
        .bind(&location.parent_location)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get(&self, name: &str) -> DomainResult<Option<Location>> {
        let row: Option<LocationRow> = sqlx::query_as("SELECT * FROM locations WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Location::from))
    }

    async fn list_all(&self) -> DomainResult<Vec<Location>> {
        let rows: Vec<LocationRow> = sqlx::query_as("SELECT * FROM locations ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Location::from).collect())
    }

    async fn delete(&self, name: &str) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM locations WHERE name = ?")
            .bind(name)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::LocationNotFound(name.to_string()));
        }

        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct LocationRow {
    name: String,
    parent_location: Option<String>,
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Self {
            name: row.name,
            parent_location: row.parent_location,
        }
    }
}
