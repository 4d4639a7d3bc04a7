//! keysift-core - Core library for keysift
//!
//! This crate contains the keyword tokenizer, the table/column search
//! registry, the search condition compiler, and the libSQL adapter used by
//! every keysift interface.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod search;
mod util;

pub use config::{SearchConfig, SearchSettings, TableConfig};
pub use error::{Error, Result};
pub use models::{Order, Record, SearchOptions};
pub use search::{Searcher, TableSearch};
