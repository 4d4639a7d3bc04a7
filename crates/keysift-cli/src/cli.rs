use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "keysift")]
#[command(about = "Keyword search across configured table columns")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the SQLite database to search
    #[arg(long, global = true, value_name = "PATH")]
    pub db_path: Option<PathBuf>,

    /// Path to the JSON search settings file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a configured table
    Search {
        /// Configured table identifier
        table: String,
        /// Keywords to search for
        keywords: Vec<String>,
        /// Maximum number of records to show
        #[arg(short, long)]
        limit: Option<usize>,
        /// Column to order results by
        #[arg(long, value_name = "COLUMN")]
        order: Option<String>,
        /// Sort descending instead of ascending
        #[arg(long, requires = "order")]
        desc: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the terms a query would search for
    Terms {
        /// Raw query text
        text: Vec<String>,
    },
    /// List configured tables and their searchable columns
    Tables {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the stopwords removed from every query
    Stopwords,
}
