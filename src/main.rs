//! Starport CLI entry point.

use clap::Parser;

use starport::cli::{Cli, Commands};
use starport::infrastructure::config::ConfigLoader;
use starport::infrastructure::setup::AppContext;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => starport::cli::handle_error(err, cli.json),
    };

    starport::infrastructure::logging::init(&config.logging);

    let ctx = match AppContext::initialize(&config).await {
        Ok(ctx) => ctx,
        Err(err) => starport::cli::handle_error(err, cli.json),
    };

    let result = match cli.command {
        Commands::Location(command) => {
            starport::cli::commands::location::execute(&ctx, command, cli.json).await
        }
        Commands::Trip(command) => {
            starport::cli::commands::trip::execute(&ctx, command, cli.json).await
        }
        Commands::Rollup(command) => {
            starport::cli::commands::rollup::execute(&ctx, &config, command, cli.json).await
        }
    };

    if let Err(err) = result {
        starport::cli::handle_error(err, cli.json);
    }
}
