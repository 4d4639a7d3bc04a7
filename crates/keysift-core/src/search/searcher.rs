//! Search entry points
//!
//! A [`Searcher`] bundles the configuration with a schema catalog and a record
//! store. Binding it to a table identifier yields a [`TableSearch`], which
//! runs keyword searches against that table's configured columns.

use crate::config::SearchConfig;
use crate::db::{Catalog, RecordStore};
use crate::error::{Error, Result};
use crate::models::{Record, SearchOptions};
use crate::search::{search_terms, Condition, SelectQuery};

/// Search entry point over a catalog and record store
pub struct Searcher<'a, C, S> {
    config: &'a SearchConfig,
    catalog: &'a C,
    store: &'a S,
}

impl<'a, C: Catalog, S: RecordStore> Searcher<'a, C, S> {
    pub const fn new(config: &'a SearchConfig, catalog: &'a C, store: &'a S) -> Self {
        Self {
            config,
            catalog,
            store,
        }
    }

    /// Bind to a configured table, e.g. `searcher.table("users")`
    pub async fn table(&self, identifier: &str) -> Result<TableSearch<'a, C, S>> {
        TableSearch::bind(self.config, self.catalog, self.store, identifier).await
    }

    /// Bind to `identifier` and run a single search
    pub async fn search(
        &self,
        identifier: &str,
        keywords: &str,
        options: &SearchOptions,
    ) -> Result<Vec<Record>> {
        self.table(identifier).await?.with(keywords, options).await
    }
}

/// Keyword search bound to one table
pub struct TableSearch<'a, C, S> {
    config: &'a SearchConfig,
    catalog: &'a C,
    store: &'a S,
    identifier: String,
    table: String,
}

impl<'a, C: Catalog, S: RecordStore> TableSearch<'a, C, S> {
    /// Bind a search to `identifier`.
    ///
    /// Fails with [`Error::UnknownTable`] or [`Error::InvalidSettings`] when
    /// the identifier has no usable column configuration, and with
    /// [`Error::InvalidModel`] when it does not resolve to a table.
    pub async fn bind(
        config: &'a SearchConfig,
        catalog: &'a C,
        store: &'a S,
        identifier: &str,
    ) -> Result<Self> {
        config.columns_for(identifier)?;
        let table = catalog.resolve(identifier).await?;

        Ok(Self {
            config,
            catalog,
            store,
            identifier: identifier.to_string(),
            table,
        })
    }

    /// Resolved table name
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Search the table's configured columns for any of the given keywords.
    ///
    /// Returns an empty list without querying the store when the keywords
    /// contain nothing but stopwords.
    pub async fn with(&self, keywords: &str, options: &SearchOptions) -> Result<Vec<Record>> {
        let terms = search_terms(keywords, &self.config.stopwords());
        if terms.is_empty() {
            tracing::debug!("No searchable terms in {keywords:?}");
            return Ok(Vec::new());
        }

        let columns = self.config.columns_for(&self.identifier)?;
        let schema = self.catalog.columns(&self.table).await?;

        if let Some(order) = &options.order {
            if !schema
                .iter()
                .any(|column| column.eq_ignore_ascii_case(&order.column))
            {
                return Err(Error::InvalidInput(format!(
                    "cannot order {} by unknown column '{}'",
                    self.table, order.column
                )));
            }
        }

        let condition = Condition::compile(&self.table, &columns, &terms, &schema);
        let Some(query) = SelectQuery::new(condition, options)? else {
            tracing::debug!("No configured columns of {} exist on its schema", self.table);
            return Ok(Vec::new());
        };

        self.store.fetch(&query).await
    }
}
