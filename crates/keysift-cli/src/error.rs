use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] keysift_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("No database given. Pass --db-path PATH to search a database.")]
    MissingDatabase,
    #[error("Database not found: {0}")]
    DatabaseNotFound(String),
}
