//! Database connection management

use crate::error::Result;
use libsql::{Builder, Connection, Database as LibSqlDatabase};
use std::path::Path;

use super::{LibSqlCatalog, LibSqlRecordStore};

/// Database wrapper for libSQL connections
pub struct Database {
    // Kept alive for as long as the connection is in use.
    _db: LibSqlDatabase,
    conn: Connection,
}

impl Database {
    /// Open a local database at the given path, creating it if it doesn't exist
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let db = Builder::new_local(&path_str).build().await?;
        let conn = db.connect()?;

        let database = Self { _db: db, conn };
        database.configure().await?;
        tracing::debug!("Opened search database at {path_str}");
        Ok(database)
    }

    /// Open an in-memory database (useful for testing)
    pub async fn open_in_memory() -> Result<Self> {
        let db = Builder::new_local(":memory:").build().await?;
        let conn = db.connect()?;

        let database = Self { _db: db, conn };
        database.configure().await?;
        Ok(database)
    }

    /// Configure `SQLite` for read-heavy search traffic
    async fn configure(&self) -> Result<()> {
        // In-memory databases reject WAL; ignore the error there.
        self.conn
            .execute("PRAGMA journal_mode = WAL;", ())
            .await
            .ok();
        self.conn.execute("PRAGMA foreign_keys = ON;", ()).await?;
        Ok(())
    }

    /// Get a reference to the underlying connection
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Schema catalog backed by this connection
    pub const fn catalog(&self) -> LibSqlCatalog<'_> {
        LibSqlCatalog::new(&self.conn)
    }

    /// Record store backed by this connection
    pub const fn store(&self) -> LibSqlRecordStore<'_> {
        LibSqlRecordStore::new(&self.conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test(flavor = "multi_thread")]
    async fn test_open_in_memory() {
        let db = Database::open_in_memory().await.unwrap();
        let mut rows = db.connection().query("SELECT 1", ()).await.unwrap();
        let row = rows.next().await.unwrap().unwrap();
        let val: i32 = row.get(0).unwrap();
        assert_eq!(val, 1);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_open_creates_file() {
        let tmp = tempdir().unwrap();
        let db_path = tmp.path().join("search.db");

        let db = Database::open(&db_path).await.unwrap();
        db.connection()
            .execute("CREATE TABLE users (id INTEGER PRIMARY KEY)", ())
            .await
            .unwrap();

        assert!(db_path.exists());
    }
}
