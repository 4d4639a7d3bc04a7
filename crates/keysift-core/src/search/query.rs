//! Parameterized `SELECT` builder for search conditions

use libsql::Value;

use crate::error::{Error, Result};
use crate::models::{Order, SearchOptions};
use crate::search::Condition;
use crate::util::quote_identifier;

/// A distinct-row select over one table, ready to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectQuery {
    condition: Condition,
    order: Option<Order>,
    limit: Option<i64>,
}

impl SelectQuery {
    /// Build a query for a non-empty condition.
    ///
    /// Returns `None` for an empty condition, which would match nothing.
    /// Fails with [`Error::InvalidInput`] when the limit does not fit in
    /// SQLite's signed 64-bit `LIMIT`.
    pub fn new(condition: Condition, options: &SearchOptions) -> Result<Option<Self>> {
        let limit = options
            .limit
            .map(i64::try_from)
            .transpose()
            .map_err(|_| Error::InvalidInput("search limit is too large".to_string()))?;

        if condition.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self {
            condition,
            order: options.order.clone(),
            limit,
        }))
    }

    pub fn table(&self) -> &str {
        self.condition.table()
    }

    pub const fn condition(&self) -> &Condition {
        &self.condition
    }

    /// Render the SQL template and its positional parameters
    pub fn to_sql(&self) -> (String, Vec<Value>) {
        let table = quote_identifier(self.condition.table());
        let (where_clause, patterns) = self.condition.to_sql();

        let mut sql = format!("SELECT DISTINCT {table}.* FROM {table} WHERE ({where_clause})");
        let mut params: Vec<Value> = patterns.into_iter().map(Value::Text).collect();

        if let Some(order) = &self.order {
            sql.push_str(&format!(
                " ORDER BY {table}.{} {}",
                quote_identifier(&order.column),
                order.direction.as_sql()
            ));
        }
        if let Some(limit) = self.limit {
            sql.push_str(" LIMIT ?");
            params.push(Value::Integer(limit));
        }

        (sql, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn condition() -> Condition {
        let columns = vec!["first_name".to_string()];
        let terms = vec!["ryan".to_string()];
        Condition::compile("users", &columns, &terms, &columns)
    }

    #[test]
    fn test_new_rejects_empty_condition() {
        assert!(SelectQuery::new(Condition::default(), &SearchOptions::default())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_to_sql_without_options() {
        let query = SelectQuery::new(condition(), &SearchOptions::default())
            .unwrap()
            .unwrap();
        let (sql, params) = query.to_sql();

        assert_eq!(
            sql,
            "SELECT DISTINCT \"users\".* FROM \"users\" WHERE (\"users\".\"first_name\" LIKE ? ESCAPE '\\')"
        );
        assert_eq!(params, vec![Value::Text("%ryan%".to_string())]);
        assert_eq!(query.table(), "users");
    }

    #[test]
    fn test_to_sql_with_order_and_limit() {
        let options = SearchOptions::default()
            .order_by(Order::desc("last_name"))
            .with_limit(10);
        let query = SelectQuery::new(condition(), &options).unwrap().unwrap();
        let (sql, params) = query.to_sql();

        assert!(sql.ends_with(" ORDER BY \"users\".\"last_name\" DESC LIMIT ?"));
        assert_eq!(
            params,
            vec![Value::Text("%ryan%".to_string()), Value::Integer(10)]
        );
    }

    #[test]
    fn test_new_rejects_limit_beyond_i64() {
        let options = SearchOptions::default().with_limit(usize::MAX);
        let error = SelectQuery::new(condition(), &options).unwrap_err();
        assert!(matches!(error, Error::InvalidInput(_)));
    }
}
