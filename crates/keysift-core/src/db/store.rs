//! Record store: executes compiled search queries

use crate::error::Result;
use crate::models::Record;
use crate::search::SelectQuery;
use libsql::params::Params;
use libsql::{Connection, Value};

/// Trait for running search queries against the data store (async)
#[allow(async_fn_in_trait)]
pub trait RecordStore {
    /// Execute a query and return every matching row
    async fn fetch(&self, query: &SelectQuery) -> Result<Vec<Record>>;
}

/// libSQL implementation of `RecordStore`
pub struct LibSqlRecordStore<'a> {
    conn: &'a Connection,
}

impl<'a> LibSqlRecordStore<'a> {
    /// Create a new store with the given connection
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl RecordStore for LibSqlRecordStore<'_> {
    async fn fetch(&self, query: &SelectQuery) -> Result<Vec<Record>> {
        let (sql, params) = query.to_sql();
        tracing::debug!("Executing search on {}: {sql}", query.table());

        let mut rows = self.conn.query(&sql, Params::Positional(params)).await?;

        let columns: Vec<String> = (0..rows.column_count())
            .map(|idx| rows.column_name(idx).unwrap_or_default().to_string())
            .collect();

        let mut records = Vec::new();
        while let Some(row) = rows.next().await? {
            let mut record = Record::new();
            for (idx, column) in (0_i32..).zip(&columns) {
                record.insert(column.as_str(), to_json(row.get_value(idx)?));
            }
            records.push(record);
        }

        tracing::debug!("Search on {} matched {} rows", query.table(), records.len());
        Ok(records)
    }
}

fn to_json(value: Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Integer(n) => n.into(),
        Value::Real(n) => n.into(),
        Value::Text(text) => text.into(),
        Value::Blob(bytes) => bytes.into(),
    }
}
