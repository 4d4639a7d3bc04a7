//! Keyword tokenizer
//!
//! Splits free text into search terms. Plain word splitting would break an
//! address like `rheath@test.com` into `rheath`, `test` and `com`, so email
//! shaped substrings are pulled out first and kept whole.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Pattern an email-like term must match.
pub const EMAIL_PATTERN: &str = r"[A-Za-z0-9_]+@[A-Za-z_]+?\.[A-Za-z]{2,6}";

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("Invalid email regex"));
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_]+").expect("Invalid word regex"));

/// Split raw search input into a deduplicated list of terms.
///
/// Terms keep the order they were found in, with extracted emails last.
///
/// # Examples
///
/// ```
/// use keysift_core::search::tokenize;
///
/// let terms = tokenize("ryan heath rheath@test.com");
/// assert_eq!(terms, vec!["ryan", "heath", "rheath@test.com"]);
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let text = text.replace('\'', "");
    let emails = extract_emails(&text);

    let words = if emails.is_empty() {
        split_words(&text)
    } else {
        split_words(&EMAIL.replace_all(&text, ""))
    };

    dedup(words.into_iter().chain(emails))
}

/// Find email-like substrings in whitespace-delimited chunks of `text`.
#[must_use]
pub fn extract_emails(text: &str) -> Vec<String> {
    text.split_whitespace()
        .flat_map(|chunk| EMAIL.find_iter(chunk))
        .map(|found| found.as_str().to_string())
        .collect()
}

fn split_words(text: &str) -> Vec<String> {
    WORD.find_iter(text)
        .map(|found| found.as_str().to_string())
        .collect()
}

fn dedup(terms: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    terms
        .into_iter()
        .filter(|term| seen.insert(term.clone()))
        .collect()
}
