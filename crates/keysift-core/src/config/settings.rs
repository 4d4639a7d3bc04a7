//! Settings file format

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Search settings as stored on disk.
///
/// ```json
/// {
///   "tables": { "users": ["first_name", "last_name", "email"] },
///   "stopwords": { "words": ["it", "is"], "overwrite": false }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SearchSettings {
    /// Searchable columns keyed by table identifier
    #[serde(default)]
    pub tables: BTreeMap<String, Vec<String>>,
    /// Optional stopword customization
    #[serde(default)]
    pub stopwords: Option<StopwordSettings>,
}

/// Stopword customization.
///
/// `words` stays untyped so a malformed list is reported as an
/// [`InvalidStopwordType`](crate::Error::InvalidStopwordType) error when the
/// settings are applied rather than as a generic parse failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StopwordSettings {
    pub words: Value,
    /// Replace the default list instead of extending it
    #[serde(default)]
    pub overwrite: bool,
}

impl SearchSettings {
    /// Parse settings from a JSON payload
    pub fn parse(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let payload = std::fs::read_to_string(path)?;
        tracing::debug!("Loaded search settings from {}", path.display());
        Self::parse(&payload)
    }
}
