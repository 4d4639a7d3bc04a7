//! Schema catalog: table resolution and column introspection

use crate::error::{Error, Result};
use libsql::Connection;

/// Trait for schema lookups used to validate searches (async)
#[allow(async_fn_in_trait)]
pub trait Catalog {
    /// Resolve a table identifier to the table's stored name.
    ///
    /// Fails with [`Error::InvalidModel`] when no table matches.
    async fn resolve(&self, identifier: &str) -> Result<String>;

    /// Column names of a resolved table
    async fn columns(&self, table: &str) -> Result<Vec<String>>;

    /// Whether `table` has a column named `column` (case-insensitive)
    async fn has_column(&self, table: &str, column: &str) -> Result<bool> {
        let columns = self.columns(table).await?;
        Ok(columns
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(column)))
    }
}

/// libSQL implementation of `Catalog`
pub struct LibSqlCatalog<'a> {
    conn: &'a Connection,
}

impl<'a> LibSqlCatalog<'a> {
    /// Create a new catalog with the given connection
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl Catalog for LibSqlCatalog<'_> {
    async fn resolve(&self, identifier: &str) -> Result<String> {
        let mut rows = self
            .conn
            .query(
                "SELECT name FROM sqlite_master
                 WHERE type IN ('table', 'view') AND name = ? COLLATE NOCASE
                 ORDER BY name = ? DESC
                 LIMIT 1",
                [identifier.trim(), identifier.trim()],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            let name: String = row.get(0)?;
            Ok(name)
        } else {
            Err(Error::InvalidModel(identifier.to_string()))
        }
    }

    async fn columns(&self, table: &str) -> Result<Vec<String>> {
        let mut rows = self
            .conn
            .query("SELECT name FROM pragma_table_info(?)", [table])
            .await?;

        let mut columns = Vec::new();
        while let Some(row) = rows.next().await? {
            columns.push(row.get::<String>(0)?);
        }
        Ok(columns)
    }
}
