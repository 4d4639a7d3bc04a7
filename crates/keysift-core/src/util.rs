//! Shared SQL helper functions.

/// Escape character used in generated `LIKE` clauses.
pub const LIKE_ESCAPE: char = '\\';

/// Quote an SQL identifier, doubling any embedded quotes.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Build a `LIKE` pattern matching any value that contains `term`.
///
/// `%`, `_` and the escape character inside `term` match literally.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
