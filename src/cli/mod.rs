//! Command-line interface.
//!
//! The CLI stands in for the excluded web layer: it collects the same
//! string-keyed parameter maps a form would deliver and hands them to the
//! services.

pub mod commands;
pub mod display;

use clap::{Parser, Subcommand};

use crate::domain::errors::DomainError;

#[derive(Parser)]
#[command(name = "starport")]
#[command(about = "Starport - trip-booking directory", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Path to a configuration file (defaults to starport.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Location directory commands
    #[command(subcommand)]
    Location(LocationCommands),

    /// Trip commands
    #[command(subcommand)]
    Trip(TripCommands),

    /// Rollup commands
    #[command(subcommand)]
    Rollup(RollupCommands),
}

#[derive(Subcommand)]
pub enum LocationCommands {
    /// Add or overwrite a location
    Add {
        /// Location name (identity; re-adding overwrites)
        name: String,

        /// Containing location, e.g. the star system a city belongs to
        #[arg(short, long)]
        parent: Option<String>,
    },

    /// List all locations
    List,

    /// Remove a location
    Remove {
        /// Location name
        name: String,
    },
}

#[derive(Subcommand)]
pub enum TripCommands {
    /// Add a trip
    Add {
        /// Trip description
        description: String,

        /// Origin location name
        #[arg(short, long)]
        origin: String,

        /// Destination location name
        #[arg(short, long)]
        destiny: String,

        /// Departure date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Available seats
        #[arg(short, long)]
        seats: Option<String>,

        /// Pilot name
        #[arg(long)]
        pilot: Option<String>,

        /// Price in credits
        #[arg(long)]
        price: Option<String>,
    },

    /// Search trips; with all of origin, destiny and date set the search
    /// matches exactly, otherwise it lists the most recent trips
    Search {
        /// Origin location name
        #[arg(short, long)]
        origin: Option<String>,

        /// Destination location name
        #[arg(short, long)]
        destiny: Option<String>,

        /// Departure date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Maximum number of results
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show a single trip
    Show {
        /// Trip id
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum RollupCommands {
    /// Run a rollup synchronously and print the snapshot
    Run,

    /// Show the current snapshot without recomputing it
    Show,

    /// Run the rollup daemon in the foreground
    Daemon,
}

/// Print an error and exit non-zero.
///
/// Validation and not-found failures get a short message; anything else
/// keeps its full context chain.
pub fn handle_error(err: anyhow::Error, json: bool) -> ! {
    let message = match err.downcast_ref::<DomainError>() {
        Some(domain_err) => domain_err.to_string(),
        None => format!("{err:#}"),
    };

    if json {
        let payload = serde_json::json!({ "error": message });
        eprintln!("{payload}");
    } else {
        eprintln!("Error: {message}");
    }
    std::process::exit(1);
}
