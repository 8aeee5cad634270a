//! Trip domain model and boundary parsers.
//!
//! Trips are append-mostly: created once from form parameters, never
//! updated or deleted. Seat counters are carried through but nothing in
//! this crate enforces their consistency.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

/// Wire format for trip dates, as delivered by the outer layer.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A scheduled trip from one location to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    /// Storage-assigned sequential id.
    pub id: i64,
    pub description: String,
    /// Origin location name. Existence is not validated.
    pub origin: String,
    /// Destination location name. Existence is not validated, and
    /// `origin != destiny` is not enforced.
    pub destiny: String,
    pub date: NaiveDate,
    /// Set once at insert, immutable.
    pub created: DateTime<Utc>,
    pub available_seats: i64,
    pub booked_seats: i64,
    pub pilot_name: Option<String>,
    /// Price in galactic credits.
    pub price: i64,
}

/// Typed save parameters parsed from a string-keyed form map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripSaveParams {
    pub description: String,
    pub origin: String,
    pub destiny: String,
    pub date: NaiveDate,
    pub available_seats: i64,
    pub pilot_name: Option<String>,
    pub price: i64,
}

impl TripSaveParams {
    /// Parse from form parameters. Absent keys are treated as empty strings.
    ///
    /// `description`, `origin`, `destiny` and `date` are required; `seats`
    /// and `price` fall back to their model defaults (1 and 0) when absent
    /// but fail validation when present and non-numeric.
    pub fn from_params(params: &HashMap<String, String>) -> DomainResult<Self> {
        let description = required(params, "description")?;
        let origin = required(params, "origin")?;
        let destiny = required(params, "destiny")?;

        let raw_date = required(params, "date")?;
        let date = NaiveDate::parse_from_str(&raw_date, DATE_FORMAT).map_err(|_| {
            DomainError::ValidationFailed(format!(
                "invalid date '{raw_date}', expected YYYY-MM-DD"
            ))
        })?;

        let available_seats = optional_int(params, "seats", 1)?;
        let price = optional_int(params, "price", 0)?;

        let pilot_name = params
            .get("pilot")
            .map(String::as_str)
            .filter(|p| !p.is_empty())
            .map(ToString::to_string);

        Ok(Self {
            description,
            origin,
            destiny,
            date,
            available_seats,
            pilot_name,
            price,
        })
    }
}

fn required(params: &HashMap<String, String>, key: &str) -> DomainResult<String> {
    let value = params.get(key).map(String::as_str).unwrap_or("").trim();
    if value.is_empty() {
        return Err(DomainError::ValidationFailed(format!("{key} is required")));
    }
    Ok(value.to_string())
}

fn optional_int(params: &HashMap<String, String>, key: &str, default: i64) -> DomainResult<i64> {
    let value = params.get(key).map(String::as_str).unwrap_or("").trim();
    if value.is_empty() {
        return Ok(default);
    }
    let parsed: i64 = value
        .parse()
        .map_err(|_| DomainError::ValidationFailed(format!("{key} must be an integer: '{value}'")))?;
    if parsed < 0 {
        return Err(DomainError::ValidationFailed(format!(
            "{key} must not be negative: {parsed}"
        )));
    }
    Ok(parsed)
}

/// Three-way outcome of parsing search filters from a form map.
///
/// The search is all-or-nothing: either origin, destiny AND date all parse
/// and the query matches exact equality on all three, or the query falls
/// back to the most recent trips overall. There is no partial filtering;
/// a single bad field silently discards the other two. Searches never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TripFilter {
    Exact {
        origin: String,
        destiny: String,
        date: NaiveDate,
    },
    Unfiltered,
}

impl TripFilter {
    /// Parse search filters from form parameters.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let origin = params.get("origin").map(String::as_str).unwrap_or("").trim();
        let destiny = params.get("destiny").map(String::as_str).unwrap_or("").trim();
        let raw_date = params.get("date").map(String::as_str).unwrap_or("").trim();

        if origin.is_empty() || destiny.is_empty() {
            return Self::Unfiltered;
        }
        match NaiveDate::parse_from_str(raw_date, DATE_FORMAT) {
            Ok(date) => Self::Exact {
                origin: origin.to_string(),
                destiny: destiny.to_string(),
                date,
            },
            Err(_) => Self::Unfiltered,
        }
    }

    /// Echo of what was actually searched, for display by the caller.
    ///
    /// The unfiltered fallback echoes all-`None` even when some of the
    /// fields were individually valid.
    pub fn echo(&self) -> SearchEcho {
        match self {
            Self::Exact {
                origin,
                destiny,
                date,
            } => SearchEcho {
                origin: Some(origin.clone()),
                destiny: Some(destiny.clone()),
                date: Some(*date),
            },
            Self::Unfiltered => SearchEcho::default(),
        }
    }
}

/// The parsed (or absent) search fields, carried back alongside results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchEcho {
    pub origin: Option<String>,
    pub destiny: Option<String>,
    pub date: Option<NaiveDate>,
}
