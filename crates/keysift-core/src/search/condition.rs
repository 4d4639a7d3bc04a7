//! Search condition compiler
//!
//! Every term is compared against every searchable column in one `OR`
//! condition, so a search costs a single query no matter how many terms or
//! columns are involved. Large term lists against wide tables still produce
//! large conditions.

use std::collections::HashSet;

use crate::util::{contains_pattern, quote_identifier, LIKE_ESCAPE};

/// A single `column LIKE %term%` comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub column: String,
    pub term: String,
}

/// `OR`-combined predicates against one table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Condition {
    table: String,
    predicates: Vec<Predicate>,
}

impl Condition {
    /// Compile search terms into a condition on `table`.
    ///
    /// Only registered columns that also exist in `schema_columns` are used;
    /// the rest are skipped. Predicates are ordered by column (registration
    /// order) and then by term.
    pub fn compile(
        table: &str,
        columns: &[String],
        terms: &[String],
        schema_columns: &[String],
    ) -> Self {
        let live: HashSet<String> = schema_columns
            .iter()
            .map(|column| column.to_lowercase())
            .collect();

        let mut predicates = Vec::with_capacity(columns.len() * terms.len());
        for column in columns {
            if !live.contains(&column.to_lowercase()) {
                tracing::warn!("Skipping column {column}: not present on table {table}");
                continue;
            }
            predicates.extend(terms.iter().map(|term| Predicate {
                column: column.clone(),
                term: term.clone(),
            }));
        }

        Self {
            table: table.to_string(),
            predicates,
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Render as an SQL fragment with one bound pattern per predicate.
    pub fn to_sql(&self) -> (String, Vec<String>) {
        let table = quote_identifier(&self.table);
        let clauses: Vec<String> = self
            .predicates
            .iter()
            .map(|predicate| {
                format!(
                    "{table}.{} LIKE ? ESCAPE '{LIKE_ESCAPE}'",
                    quote_identifier(&predicate.column)
                )
            })
            .collect();
        let params = self
            .predicates
            .iter()
            .map(|predicate| contains_pattern(&predicate.term))
            .collect();

        (clauses.join(" OR "), params)
    }
}
