use anyhow::{Context, Result};

use crate::cli::RollupCommands;
use crate::domain::models::{Config, TopLocations};
use crate::infrastructure::setup::AppContext;
use crate::services::{RollupDaemon, RollupDaemonConfig};

pub async fn execute(
    ctx: &AppContext,
    config: &Config,
    command: RollupCommands,
    json: bool,
) -> Result<()> {
    match command {
        RollupCommands::Run => {
            let snapshot = ctx.rollup.run().await.context("Rollup run failed")?;
            print_snapshot(&snapshot, json)?;
            Ok(())
        }
        RollupCommands::Show => {
            let snapshot = ctx
                .rollup
                .current_snapshot()
                .await
                .context("Failed to load snapshot")?;
            match snapshot {
                Some(snapshot) => print_snapshot(&snapshot, json)?,
                None if json => println!("null"),
                None => println!("No rollup has run yet."),
            }
            Ok(())
        }
        RollupCommands::Daemon => run_daemon(ctx, config).await,
    }
}

async fn run_daemon(ctx: &AppContext, config: &Config) -> Result<()> {
    let daemon = RollupDaemon::new(
        ctx.rollup.clone(),
        RollupDaemonConfig::from(&config.rollup),
    );
    let (handle, mut join) = daemon.spawn();

    println!(
        "Rollup daemon running every {}s. Press Ctrl-C to stop.",
        config.rollup.interval_secs
    );

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            handle.stop();
            let _ = (&mut join).await;
        }
        reason = &mut join => {
            println!("Daemon exited: {:?}", reason.context("Daemon task panicked")?);
        }
    }

    let status = handle.status().await;
    println!(
        "Runs: {} total, {} ok, {} failed",
        status.total_runs, status.successful_runs, status.failed_runs
    );
    Ok(())
}

fn print_snapshot(snapshot: &TopLocations, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(snapshot)?);
        return Ok(());
    }

    println!("Top locations as of {}", snapshot.updated_at);
    println!("  Origins:");
    for (i, name) in snapshot.origins.iter().enumerate() {
        println!("    {}. {}", i + 1, name);
    }
    println!("  Destinations:");
    for (i, name) in snapshot.destinations.iter().enumerate() {
        println!("    {}. {}", i + 1, name);
    }
    Ok(())
}
