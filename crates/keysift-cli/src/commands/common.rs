use std::path::Path;

use keysift_core::db::Database;
use keysift_core::models::Direction;
use keysift_core::{Order, Record, SearchConfig, SearchOptions, SearchSettings, Searcher};
use serde_json::Value;

use crate::error::CliError;

/// Build the search registry from an optional settings file
pub fn load_config(path: Option<&Path>) -> Result<SearchConfig, CliError> {
    let Some(path) = path else {
        tracing::debug!("No settings file given; using defaults");
        return Ok(SearchConfig::new());
    };

    let settings = SearchSettings::load(path)?;
    Ok(SearchConfig::from_settings(&settings)?)
}

pub async fn open_database(path: Option<&Path>) -> Result<Database, CliError> {
    let path = path.ok_or(CliError::MissingDatabase)?;
    if !path.exists() {
        return Err(CliError::DatabaseNotFound(path.display().to_string()));
    }
    Ok(Database::open(path).await?)
}

/// Join positional keyword arguments into one query string.
///
/// Blank input is passed through; it searches for nothing and yields no records.
pub fn join_keywords(keywords: &[String]) -> String {
    keywords.join(" ").trim().to_string()
}

pub fn build_options(limit: Option<usize>, order: Option<String>, desc: bool) -> SearchOptions {
    SearchOptions {
        order: order.map(|column| Order {
            column,
            direction: if desc { Direction::Desc } else { Direction::Asc },
        }),
        limit,
    }
}

pub async fn search_records(
    config: &SearchConfig,
    db: &Database,
    table: &str,
    keywords: &str,
    options: &SearchOptions,
) -> Result<Vec<Record>, CliError> {
    let catalog = db.catalog();
    let store = db.store();
    config.validate(&catalog).await?;

    let searcher = Searcher::new(config, &catalog, &store);
    Ok(searcher.search(table, keywords, options).await?)
}

pub fn format_record_lines(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .map(|record| {
            record
                .columns()
                .map(|column| {
                    let value = record.get(column).map_or_else(String::new, format_value);
                    format!("{column}={value}")
                })
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect()
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
