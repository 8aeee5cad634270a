use std::collections::HashMap;

use anyhow::{Context, Result};

use crate::cli::display::format_trip_table;
use crate::cli::TripCommands;
use crate::infrastructure::setup::AppContext;

pub async fn execute(ctx: &AppContext, command: TripCommands, json: bool) -> Result<()> {
    match command {
        TripCommands::Add {
            description,
            origin,
            destiny,
            date,
            seats,
            pilot,
            price,
        } => {
            let mut params = HashMap::new();
            params.insert("description".to_string(), description);
            params.insert("origin".to_string(), origin);
            params.insert("destiny".to_string(), destiny);
            params.insert("date".to_string(), date);
            if let Some(seats) = seats {
                params.insert("seats".to_string(), seats);
            }
            if let Some(pilot) = pilot {
                params.insert("pilot".to_string(), pilot);
            }
            if let Some(price) = price {
                params.insert("price".to_string(), price);
            }
            handle_add(ctx, &params, json).await
        }
        TripCommands::Search {
            origin,
            destiny,
            date,
            limit,
        } => {
            let mut params = HashMap::new();
            if let Some(origin) = origin {
                params.insert("origin".to_string(), origin);
            }
            if let Some(destiny) = destiny {
                params.insert("destiny".to_string(), destiny);
            }
            if let Some(date) = date {
                params.insert("date".to_string(), date);
            }
            handle_search(ctx, &params, limit, json).await
        }
        TripCommands::Show { id } => handle_show(ctx, id, json).await,
    }
}

async fn handle_add(ctx: &AppContext, params: &HashMap<String, String>, json: bool) -> Result<()> {
    let trip = ctx.trips.save(params).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&trip)?);
    } else {
        println!("Trip created!");
        println!("  Id: {}", trip.id);
        println!("  Route: {} -> {}", trip.origin, trip.destiny);
        println!("  Date: {}", trip.date);
        println!("  Seats: {}", trip.available_seats);
        println!("  Price: {} credits", trip.price);
    }
    Ok(())
}

async fn handle_search(
    ctx: &AppContext,
    params: &HashMap<String, String>,
    limit: usize,
    json: bool,
) -> Result<()> {
    let (trips, echo) = ctx
        .trips
        .query_filtered(params, limit)
        .await
        .context("Failed to search trips")?;

    if json {
        let payload = serde_json::json!({ "searched": echo, "trips": trips });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        match (&echo.origin, &echo.destiny, &echo.date) {
            (Some(origin), Some(destiny), Some(date)) => {
                println!("Trips {origin} -> {destiny} on {date}:");
            }
            _ => println!("Most recent trips:"),
        }
        println!("{}", format_trip_table(&trips));
    }
    Ok(())
}

async fn handle_show(ctx: &AppContext, id: i64, json: bool) -> Result<()> {
    let trip = ctx.trips.get(id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&trip)?);
    } else {
        println!("Trip {}", trip.id);
        println!("  Description: {}", trip.description);
        println!("  Route: {} -> {}", trip.origin, trip.destiny);
        println!("  Date: {}", trip.date);
        println!("  Created: {}", trip.created);
        println!("  Seats: {} available, {} booked", trip.available_seats, trip.booked_seats);
        if let Some(pilot) = &trip.pilot_name {
            println!("  Pilot: {pilot}");
        }
        println!("  Price: {} credits", trip.price);
    }
    Ok(())
}
