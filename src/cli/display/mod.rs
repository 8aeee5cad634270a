//! Table rendering for list output.

use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Table};

use crate::domain::models::{Location, Trip};

/// Create a borderless list table with the given headers.
pub fn list_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h.to_uppercase()).set_alignment(CellAlignment::Left)),
        );
    table
}

pub fn format_location_table(locations: &[Location]) -> String {
    if locations.is_empty() {
        return "No locations found.".to_string();
    }

    let mut table = list_table(&["name", "parent"]);
    for location in locations {
        table.add_row(vec![
            location.name.clone(),
            location.parent_location.clone().unwrap_or_default(),
        ]);
    }
    format!("{} location(s):\n{table}", locations.len())
}

pub fn format_trip_table(trips: &[Trip]) -> String {
    if trips.is_empty() {
        return "No trips found.".to_string();
    }

    let mut table = list_table(&["id", "date", "origin", "destiny", "seats", "price", "pilot"]);
    for trip in trips {
        table.add_row(vec![
            trip.id.to_string(),
            trip.date.to_string(),
            trip.origin.clone(),
            trip.destiny.clone(),
            trip.available_seats.to_string(),
            trip.price.to_string(),
            trip.pilot_name.clone().unwrap_or_default(),
        ]);
    }
    format!("{} trip(s):\n{table}", trips.len())
}
