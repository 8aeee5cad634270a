use std::collections::HashMap;

use anyhow::{Context, Result};

use crate::cli::display::format_location_table;
use crate::cli::LocationCommands;
use crate::infrastructure::setup::AppContext;

pub async fn execute(ctx: &AppContext, command: LocationCommands, json: bool) -> Result<()> {
    match command {
        LocationCommands::Add { name, parent } => handle_add(ctx, name, parent, json).await,
        LocationCommands::List => handle_list(ctx, json).await,
        LocationCommands::Remove { name } => handle_remove(ctx, name, json).await,
    }
}

async fn handle_add(
    ctx: &AppContext,
    name: String,
    parent: Option<String>,
    json: bool,
) -> Result<()> {
    let mut params = HashMap::new();
    params.insert("name".to_string(), name);
    if let Some(parent) = parent {
        params.insert("parent".to_string(), parent);
    }

    let location = ctx
        .locations
        .save(&params)
        .await
        .context("Failed to save location")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&location)?);
    } else {
        println!("Location saved: {}", location.name);
        if let Some(parent) = &location.parent_location {
            println!("  Parent: {parent}");
        }
    }
    Ok(())
}

async fn handle_list(ctx: &AppContext, json: bool) -> Result<()> {
    let locations = ctx
        .locations
        .get_all()
        .await
        .context("Failed to list locations")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&locations)?);
    } else {
        println!("{}", format_location_table(&locations));
    }
    Ok(())
}

async fn handle_remove(ctx: &AppContext, name: String, json: bool) -> Result<()> {
    ctx.locations.delete(&name).await?;

    if json {
        println!("{}", serde_json::json!({ "removed": name }));
    } else {
        println!("Location removed: {name}");
    }
    Ok(())
}
