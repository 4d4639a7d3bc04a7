//! keysift CLI - keyword search from the command line
//!
//! Searches the columns configured in a JSON settings file for any of the
//! given keywords.

mod cli;
mod commands;
mod error;


use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::search::run_search;
use crate::commands::stopwords::run_stopwords;
use crate::commands::tables::run_tables;
use crate::commands::terms::run_terms;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("keysift=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let db_path = cli.db_path.as_deref();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Search {
            table,
            keywords,
            limit,
            order,
            desc,
            json,
        } => {
            run_search(
                &table,
                &keywords,
                limit,
                order,
                desc,
                json,
                db_path,
                config_path,
            )
            .await?;
        }
        Commands::Terms { text } => run_terms(&text, config_path)?,
        Commands::Tables { json } => run_tables(json, config_path)?,
        Commands::Stopwords => run_stopwords(config_path)?,
    }

    Ok(())
}
