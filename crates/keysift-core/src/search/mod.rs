//! Keyword search for keysift
//!
//! Raw input is tokenized, stripped of stopwords, and compiled into a single
//! `OR` condition over a table's configured columns.

mod condition;
mod query;
mod searcher;
mod stopwords;
mod tokenizer;

pub use condition::{Condition, Predicate};
pub use query::SelectQuery;
pub use searcher::{Searcher, TableSearch};
pub use stopwords::{filter_stopwords, DEFAULT_STOPWORDS};
pub use tokenizer::{extract_emails, tokenize, EMAIL_PATTERN};

/// Tokenize `keywords` and drop stopwords, yielding the terms to search for.
#[must_use]
pub fn search_terms<S: AsRef<str>>(keywords: &str, stopwords: &[S]) -> Vec<String> {
    filter_stopwords(&tokenize(keywords), stopwords)
}
