//! SQLite implementation of the TripRepository.
//!
//! Dates are stored as `YYYY-MM-DD` text, so lexicographic comparison in
//! SQL matches calendar order. Results are ordered by date descending with
//! id descending as the deterministic tie-break.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use futures::StreamExt;
use sqlx::SqlitePool;

use crate::adapters::sqlite::{parse_date, parse_datetime};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::trip::DATE_FORMAT;
use crate::domain::models::{Trip, TripSaveParams};
use crate::domain::ports::{TripRepository, TripStream};

#[derive(Clone)]
pub struct SqliteTripRepository {
    pool: SqlitePool,
}

impl SqliteTripRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TripRepository for SqliteTripRepository {
    async fn insert(&self, params: &TripSaveParams) -> DomainResult<Trip> {
        let created = Utc::now();

        let result = sqlx::query(
            r#"INSERT INTO trips (description, origin, destiny, date, created,
               available_seats, booked_seats, pilot_name, price)
               VALUES (?, ?, ?, ?, ?, ?, 0, ?, ?)"#,
        )
        .bind(&params.description)
        .bind(&params.origin)
        .bind(&params.destiny)
        .bind(params.date.format(DATE_FORMAT).to_string())
        .bind(created.to_rfc3339())
        .bind(params.available_seats)
        .bind(&params.pilot_name)
        .bind(params.price)
        .execute(&self.pool)
        .await?;

        Ok(Trip {
            id: result.last_insert_rowid(),
            description: params.description.clone(),
            origin: params.origin.clone(),
            destiny: params.destiny.clone(),
            date: params.date,
            created,
            available_seats: params.available_seats,
            booked_seats: 0,
            pilot_name: params.pilot_name.clone(),
            price: params.price,
        })
    }

    async fn get(&self, id: i64) -> DomainResult<Option<Trip>> {
        let row: Option<TripRow> = sqlx::query_as("SELECT * FROM trips WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn find_exact(
        &self,
        origin: &str,
        destiny: &str,
        date: NaiveDate,
        limit: usize,
    ) -> DomainResult<Vec<Trip>> {
        let rows: Vec<TripRow> = sqlx::query_as(
            r#"SELECT * FROM trips
               WHERE origin = ? AND destiny = ? AND date = ?
               ORDER BY date DESC, id DESC
               LIMIT ?"#,
        )
        .bind(origin)
        .bind(destiny)
        .bind(date.format(DATE_FORMAT).to_string())
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn list_recent(&self, limit: usize) -> DomainResult<Vec<Trip>> {
        let rows: Vec<TripRow> = sqlx::query_as(
            "SELECT * FROM trips ORDER BY date DESC, id DESC LIMIT ?",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    fn scan_since(&self, cutoff: NaiveDate) -> TripStream<'_> {
        // Strict comparison: trips dated exactly at the cutoff are outside
        // the window.
        let stream = sqlx::query_as::<_, TripRow>(
            "SELECT * FROM trips WHERE date > ? ORDER BY id",
        )
        .bind(cutoff.format(DATE_FORMAT).to_string())
        .fetch(&self.pool)
        .map(|row| match row {
            Ok(r) => r.try_into(),
            Err(e) => Err(DomainError::from(e)),
        });

        stream.boxed()
    }
}

#[derive(sqlx::FromRow)]
struct TripRow {
    id: i64,
    description: String,
    origin: String,
    destiny: String,
    date: String,
    created: String,
    available_seats: i64,
    booked_seats: i64,
    pilot_name: Option<String>,
    price: i64,
}

impl TryFrom<TripRow> for Trip {
    type Error = DomainError;

    fn try_from(row: TripRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            description: row.description,
            origin: row.origin,
            destiny: row.destiny,
            date: parse_date(&row.date)?,
            created: parse_datetime(&row.created)?,
            available_seats: row.available_seats,
            booked_seats: row.booked_seats,
            pilot_name: row.pilot_name,
            price: row.price,
        })
    }
}
