//! Trip creation and search.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{SearchEcho, Trip, TripFilter, TripSaveParams};
use crate::domain::ports::TripRepository;

/// Default bound on search results.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

pub struct TripService {
    trips: Arc<dyn TripRepository>,
}

impl TripService {
    pub fn new(trips: Arc<dyn TripRepository>) -> Self {
        Self { trips }
    }

    /// Create a trip from form parameters.
    ///
    /// Origin and destiny are resolved by name without existence checks;
    /// a trip may reference locations that were never saved.
    pub async fn save(&self, params: &HashMap<String, String>) -> DomainResult<Trip> {
        let parsed = TripSaveParams::from_params(params)?;
        let trip = self.trips.insert(&parsed).await?;
        debug!(id = trip.id, origin = %trip.origin, destiny = %trip.destiny, "trip created");
        Ok(trip)
    }

    /// Look up a single trip by id.
    pub async fn get(&self, id: i64) -> DomainResult<Trip> {
        self.trips
            .get(id)
            .await?
            .ok_or(DomainError::TripNotFound(id))
    }

    /// Search trips from form parameters; never fails on bad filters.
    ///
    /// When origin, destiny and date all parse, returns trips matching all
    /// three exactly; otherwise falls back to the `limit` most recent
    /// trips, ignoring any individually-valid fields. Results are ordered
    /// by date descending, id descending. The echo reports what was
    /// actually searched.
    pub async fn query_filtered(
        &self,
        params: &HashMap<String, String>,
        limit: usize,
    ) -> DomainResult<(Vec<Trip>, SearchEcho)> {
        let filter = TripFilter::from_params(params);
        let echo = filter.echo();

        let trips = match filter {
            TripFilter::Exact {
                origin,
                destiny,
                date,
            } => {
                self.trips
                    .find_exact(&origin, &destiny, date, limit)
                    .await?
            }
            TripFilter::Unfiltered => self.trips.list_recent(limit).await?,
        };

        debug!(count = trips.len(), filtered = echo.origin.is_some(), "trip search");
        Ok((trips, echo))
    }
}
