//! Dull keyword filtering

use std::collections::HashSet;

/// Words removed from every search unless the stopword list is replaced.
pub const DEFAULT_STOPWORDS: [&str; 7] = ["a", "the", "and", "but", "or", "so", "what"];

/// Remove stopwords from `terms`, comparing case-insensitively.
///
/// Returned terms are lowercased and deduplicated, in input order. An empty
/// result means the input had nothing worth searching for.
#[must_use]
pub fn filter_stopwords<S: AsRef<str>>(terms: &[String], stopwords: &[S]) -> Vec<String> {
    let dull: HashSet<String> = stopwords
        .iter()
        .map(|word| word.as_ref().to_lowercase())
        .collect();

    let mut seen = HashSet::new();
    terms
        .iter()
        .map(|term| term.to_lowercase())
        .filter(|term| !dull.contains(term) && seen.insert(term.clone()))
        .collect()
}
