//! Brook CLI - Command-line interface for the local article store
//!
//! Adds, imports, lists and stars articles read by the desktop app.

mod cli;
mod commands;
mod error;
#[cfg(test)]
mod tests;

use brook_core::config::AppConfig;
use brook_core::StarStatus;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::import::run_import;
use crate::commands::list::run_list;
use crate::commands::show::run_show;
use crate::commands::star::run_star;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::from_env().with_db_path(cli.db_path);
    init_logging(&config);
    let db_path = config.db_path();

    match cli.command {
        Commands::Add(args) => run_add(args, db_path).await?,
        Commands::Import { path } => run_import(&path, db_path).await?,
        Commands::List {
            limit,
            starred,
            json,
        } => run_list(limit, starred, json, db_path).await?,
        Commands::Show { url, json } => run_show(&url, json, db_path).await?,
        Commands::Star { url } => run_star(&url, StarStatus::Starred, db_path).await?,
        Commands::Unstar { url } => run_star(&url, StarStatus::Unstarred, db_path).await?,
    }

    Ok(())
}

fn init_logging(config: &AppConfig) {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = "warn".parse() {
        filter = filter.add_directive(directive);
    }
    if let Some(extra) = &config.log_filter {
        for directive in extra.split(',').filter_map(|d| d.trim().parse().ok()) {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
