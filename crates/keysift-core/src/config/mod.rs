//! Search configuration registry.
//!
//! Holds which columns are searchable for each table and which dull keywords
//! are dropped from queries. A single `SearchConfig` is built at startup and
//! borrowed by every [`TableSearch`](crate::search::TableSearch).

mod settings;

use std::collections::{HashMap, HashSet};

use parking_lot::RwLock;
use serde::Serialize;
use serde_json::Value;

use crate::db::Catalog;
use crate::error::{Error, Result};
use crate::search::DEFAULT_STOPWORDS;

pub use settings::{SearchSettings, StopwordSettings};

/// Searchable columns registered for one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableConfig {
    /// Table identifier as it was registered
    pub table: String,
    /// Searchable columns, in registration order
    pub columns: Vec<String>,
}

/// Process-wide table and stopword configuration.
#[derive(Debug)]
pub struct SearchConfig {
    tables: RwLock<HashMap<String, TableConfig>>,
    stopwords: RwLock<Vec<String>>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchConfig {
    /// Create an empty registry with the default stopwords
    #[must_use]
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
            stopwords: RwLock::new(default_stopwords()),
        }
    }

    /// Build a registry from loaded settings
    pub fn from_settings(settings: &SearchSettings) -> Result<Self> {
        let config = Self::new();
        config.apply(Some(settings))?;
        Ok(config)
    }

    /// Apply a batch of settings on top of the current configuration.
    ///
    /// Returns `None` when no settings were supplied, otherwise the registered
    /// tables after the update.
    pub fn apply(&self, settings: Option<&SearchSettings>) -> Result<Option<Vec<TableConfig>>> {
        let Some(settings) = settings else {
            return Ok(None);
        };

        if let Some(stopwords) = &settings.stopwords {
            self.set_stopwords_json(&stopwords.words, stopwords.overwrite)?;
        }
        for (table, columns) in &settings.tables {
            self.configure(table, columns);
        }

        Ok(Some(self.tables()))
    }

    /// Register the searchable columns for a table, replacing any earlier entry.
    pub fn configure<I, S>(&self, table: &str, columns: I) -> TableConfig
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entry = TableConfig {
            table: table.trim().to_string(),
            columns: normalize_columns(columns),
        };

        tracing::info!(
            "Configured search columns for {}: {:?}",
            entry.table,
            entry.columns
        );
        self.tables.write().insert(table_key(table), entry.clone());
        entry
    }

    /// Searchable columns for a table, in registration order
    pub fn columns_for(&self, table: &str) -> Result<Vec<String>> {
        let tables = self.tables.read();
        let entry = tables
            .get(&table_key(table))
            .ok_or_else(|| Error::UnknownTable(table.to_string()))?;

        if entry.columns.is_empty() {
            return Err(Error::InvalidSettings(table.to_string()));
        }
        Ok(entry.columns.clone())
    }

    /// Look up a table's configuration without validating it
    pub fn table(&self, table: &str) -> Option<TableConfig> {
        self.tables.read().get(&table_key(table)).cloned()
    }

    /// All registered tables, sorted by identifier
    pub fn tables(&self) -> Vec<TableConfig> {
        let mut tables: Vec<TableConfig> = self.tables.read().values().cloned().collect();
        tables.sort_by_key(|entry| table_key(&entry.table));
        tables
    }

    /// Append to or replace the stopword list.
    ///
    /// Returns the list in effect after the update.
    pub fn set_stopwords<I, S>(&self, words: I, overwrite: bool) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stopwords = self.stopwords.write();
        let incoming = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty());

        let merged: Vec<String> = if overwrite {
            incoming.collect()
        } else {
            stopwords.iter().cloned().chain(incoming).collect()
        };
        *stopwords = dedup(merged);

        tracing::info!(
            "Stopwords {} ({} words)",
            if overwrite { "replaced" } else { "extended" },
            stopwords.len()
        );
        stopwords.clone()
    }

    /// Append to or replace the stopword list from an untyped JSON value.
    ///
    /// The value must be an array whose items are all strings.
    pub fn set_stopwords_json(&self, words: &Value, overwrite: bool) -> Result<Vec<String>> {
        let Value::Array(items) = words else {
            return Err(Error::InvalidStopwordType(format!(
                "expected a list of strings, got {}",
                json_type_name(words)
            )));
        };

        let words = items
            .iter()
            .map(|item| {
                item.as_str().ok_or_else(|| {
                    Error::InvalidStopwordType(format!(
                        "expected string list items, got {}",
                        json_type_name(item)
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(self.set_stopwords(words, overwrite))
    }

    /// Restore the built-in stopword list
    pub fn reset_stopwords(&self) -> Vec<String> {
        self.set_stopwords(DEFAULT_STOPWORDS, true)
    }

    /// Current stopword list
    pub fn stopwords(&self) -> Vec<String> {
        self.stopwords.read().clone()
    }

    /// Check that every registered table resolves in the catalog.
    pub async fn validate<C: Catalog>(&self, catalog: &C) -> Result<()> {
        for entry in self.tables() {
            catalog.resolve(&entry.table).await?;
        }
        Ok(())
    }
}

fn table_key(table: &str) -> String {
    table.trim().to_lowercase()
}

fn default_stopwords() -> Vec<String> {
    DEFAULT_STOPWORDS.iter().map(ToString::to_string).collect()
}

fn normalize_columns<I, S>(columns: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    columns
        .into_iter()
        .map(|column| column.as_ref().trim().to_string())
        .filter(|column| !column.is_empty() && seen.insert(column.to_lowercase()))
        .collect()
}

fn dedup(words: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    words
        .into_iter()
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn users_config() -> SearchConfig {
        let config = SearchConfig::new();
        config.configure("users", ["first_name", "last_name", "email"]);
        config.configure("projects", ["title", "description"]);
        config.configure("groups", ["name", "description"]);
        config
    }

    #[test]
    fn test_columns_for_keeps_registration_order() {
        let config = users_config();
        assert_eq!(
            config.columns_for("users").unwrap(),
            vec!["first_name", "last_name", "email"]
        );
        assert_eq!(config.columns_for("projects").unwrap().len(), 2);
        assert_eq!(config.columns_for("groups").unwrap().len(), 2);
    }

    #[test]
    fn test_table_identifier_is_case_insensitive() {
        let config = users_config();
        assert_eq!(
            config.columns_for("USERS").unwrap(),
            config.columns_for("users").unwrap()
        );
    }

    #[test]
    fn test_tables_lists_every_registration() {
        let config = users_config();
        let names: Vec<String> = config.tables().into_iter().map(|t| t.table).collect();
        assert_eq!(names, vec!["groups", "projects", "users"]);
    }

    #[test]
    fn test_configure_last_write_wins() {
        let config = users_config();
        config.configure("Users", ["email"]);
        assert_eq!(config.columns_for("users").unwrap(), vec!["email"]);
        assert_eq!(config.tables().len(), 3);
    }

    #[test]
    fn test_configure_normalizes_columns() {
        let config = SearchConfig::new();
        let entry = config.configure("users", [" email ", "EMAIL", "", "name", "email"]);
        assert_eq!(entry.columns, vec!["email", "name"]);
    }

    #[test]
    fn test_columns_for_unknown_table() {
        let config = users_config();
        let error = config.columns_for("whatever").unwrap_err();
        assert!(matches!(error, Error::UnknownTable(name) if name == "whatever"));
    }

    #[test]
    fn test_columns_for_table_without_columns() {
        let config = SearchConfig::new();
        config.configure("sample", Vec::<String>::new());
        let error = config.columns_for("sample").unwrap_err();
        assert!(matches!(error, Error::InvalidSettings(_)));
    }

    #[test]
    fn test_default_stopwords() {
        let config = SearchConfig::new();
        assert_eq!(config.stopwords(), DEFAULT_STOPWORDS.to_vec());
    }

    #[test]
    fn test_set_stopwords_appends_without_duplicates() {
        let config = SearchConfig::new();
        config.set_stopwords(["x"], false);
        let words = config.set_stopwords(["y", "x", "the"], false);

        let mut expected: Vec<String> = default_stopwords();
        expected.extend(["x".to_string(), "y".to_string()]);
        assert_eq!(words, expected);
        assert_eq!(config.stopwords(), expected);
    }

    #[test]
    fn test_set_stopwords_overwrite() {
        let config = SearchConfig::new();
        config.set_stopwords(["x"], false);
        assert_eq!(config.set_stopwords(["z"], true), vec!["z"]);
        assert_eq!(config.stopwords(), vec!["z"]);
    }

    #[test]
    fn test_set_stopwords_lowercases() {
        let config = SearchConfig::new();
        assert_eq!(config.set_stopwords(["Whatever", "WANT"], true), vec!["whatever", "want"]);
    }

    #[test]
    fn test_reset_stopwords() {
        let config = SearchConfig::new();
        config.set_stopwords(["z"], true);
        assert_eq!(config.reset_stopwords(), DEFAULT_STOPWORDS.to_vec());
    }

    #[test]
    fn test_set_stopwords_json_accepts_string_list() {
        let config = SearchConfig::new();
        let words = config
            .set_stopwords_json(&json!(["something", "else"]), true)
            .unwrap();
        assert_eq!(words, vec!["something", "else"]);
    }

    #[test]
    fn test_set_stopwords_json_rejects_non_list() {
        let config = SearchConfig::new();
        let error = config.set_stopwords_json(&json!("the"), false).unwrap_err();
        assert!(matches!(error, Error::InvalidStopwordType(_)));

        let error = config
            .set_stopwords_json(&json!({"words": ["the"]}), false)
            .unwrap_err();
        assert!(matches!(error, Error::InvalidStopwordType(_)));
    }

    #[test]
    fn test_set_stopwords_json_rejects_nested_or_mixed_lists() {
        let config = SearchConfig::new();
        let error = config
            .set_stopwords_json(&json!(["ok", ["nested"]]), false)
            .unwrap_err();
        assert!(matches!(error, Error::InvalidStopwordType(_)));

        let error = config.set_stopwords_json(&json!(["ok", 3]), false).unwrap_err();
        assert!(matches!(error, Error::InvalidStopwordType(_)));

        // A rejected update leaves the list untouched.
        assert_eq!(config.stopwords(), DEFAULT_STOPWORDS.to_vec());
    }

    #[test]
    fn test_apply_without_settings_is_noop() {
        let config = users_config();
        assert!(config.apply(None).unwrap().is_none());
        assert_eq!(config.tables().len(), 3);
    }

    #[test]
    fn test_apply_settings() {
        let settings = SearchSettings::parse(
            r#"{
                "tables": { "users": ["first_name", "email"] },
                "stopwords": { "words": ["it", "is"] }
            }"#,
        )
        .unwrap();

        let config = SearchConfig::new();
        let tables = config.apply(Some(&settings)).unwrap().unwrap();
        assert_eq!(
            tables,
            vec![TableConfig {
                table: "users".to_string(),
                columns: vec!["first_name".to_string(), "email".to_string()],
            }]
        );
        assert!(config.stopwords().contains(&"it".to_string()));
        assert!(config.stopwords().contains(&"the".to_string()));
    }

    #[test]
    fn test_concurrent_updates_are_never_torn() {
        let words_a = vec!["alpha", "beta", "gamma"];
        let words_b = vec!["delta", "epsilon"];
        let columns_a = vec!["first_name", "last_name", "email"];
        let columns_b = vec!["title"];

        let config = SearchConfig::new();
        config.configure("users", &columns_a);
        let defaults = config.stopwords();

        std::thread::scope(|scope| {
            scope.spawn(|| {
                for round in 0..500 {
                    if round % 2 == 0 {
                        config.set_stopwords(&words_a, true);
                        config.configure("users", &columns_b);
                    } else {
                        config.set_stopwords(&words_b, true);
                        config.configure("users", &columns_a);
                    }
                }
            });

            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..500 {
                        let stopwords = config.stopwords();
                        assert!(
                            stopwords == defaults || stopwords == words_a || stopwords == words_b,
                            "torn stopword list: {stopwords:?}"
                        );

                        let columns = config.columns_for("users").unwrap();
                        assert!(
                            columns == columns_a || columns == columns_b,
                            "torn column list: {columns:?}"
                        );
                    }
                });
            }
        });

        assert_eq!(config.stopwords(), words_b);
        assert_eq!(config.columns_for("users").unwrap(), columns_a);
    }
}
