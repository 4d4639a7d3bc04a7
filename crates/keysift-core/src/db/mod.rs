//! Database layer for keysift

mod catalog;
mod connection;
mod store;

pub use catalog::{Catalog, LibSqlCatalog};
pub use connection::Database;
pub use store::{LibSqlRecordStore, RecordStore};
