//! Error types for keysift-core

use thiserror::Error;

/// Result type alias using keysift-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in keysift-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Table identifier has no registered column configuration
    #[error("Unknown table: '{0}' has no search configuration")]
    UnknownTable(String),

    /// Table is registered without any searchable columns
    #[error("Invalid settings: no columns configured for '{0}'")]
    InvalidSettings(String),

    /// Identifier does not resolve to a table in the data store
    #[error("Invalid model: '{0}' does not resolve to a table")]
    InvalidModel(String),

    /// Stopword configuration was not a flat list of strings
    #[error("Invalid stopword type: {0}")]
    InvalidStopwordType(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// libSQL error
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
