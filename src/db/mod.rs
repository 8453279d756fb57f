//! Database module using DuckDB
//!
//! One embedded, file-backed table holding the distribution list. The
//! connection lives behind an async mutex, so seeding and loading never
//! touch it at the same time even when several loads are in flight.

mod queries;
mod schema;

pub use schema::TABLE;

use duckdb::Connection;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::config::{DatabaseConfig, DB_FILE_NAME};
use crate::error::{Error, Result};
use crate::record::Record;

/// Database wrapper for the distributions table
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
    path: Option<PathBuf>,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database").field("path", &self.path).finish()
    }
}

impl Database {
    /// Open (creating if absent) the database file.
    ///
    /// # Arguments
    /// * `config` - Database configuration
    /// * `data_dir` - Default data directory for the local file
    ///
    /// Every failure on this path is reported as [`Error::StoreOpen`].
    pub async fn open(config: &DatabaseConfig, data_dir: &Path) -> Result<Self> {
        let db_path = config
            .path
            .as_ref()
            .map_or_else(|| data_dir.join(DB_FILE_NAME), PathBuf::from);

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| Error::store_open(&db_path, e))?;
            }
        }

        // Opening is synchronous file I/O
        let open_path = db_path.clone();
        let conn = tokio::task::spawn_blocking(move || Connection::open(&open_path))
            .await
            .map_err(|e| Error::store_open(&db_path, e))?
            .map_err(|e| Error::store_open(&db_path, e))?;

        debug!("opened database at {}", db_path.display());

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path: Some(db_path),
        })
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| Error::store_open(":memory:", e))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path: None,
        })
    }

    /// File backing this database, `None` when in memory
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Create the table if it does not exist
    pub async fn ensure_table(&self) -> Result<()> {
        let conn = self.conn.lock().await;
        schema::init_schema(&conn)
    }

    /// Create the table if needed and replace its contents with `records`.
    ///
    /// The lock is held for the whole pass, so a concurrent [`fetch_all`]
    /// sees the table as it was before or after, never part way through.
    /// Returns the number of rows removed and one insert result per record.
    ///
    /// [`fetch_all`]: Self::fetch_all
    pub async fn reset(&self, records: &[Record]) -> Result<(usize, Vec<Result<()>>)> {
        let conn = self.conn.lock().await;
        schema::init_schema(&conn)?;
        queries::replace_all(&conn, records)
    }

    /// Insert a single record
    pub async fn insert(&self, record: &Record) -> Result<()> {
        let conn = self.conn.lock().await;
        queries::insert_record(&conn, record)
    }

    /// Read every stored record
    pub async fn fetch_all(&self) -> Result<Vec<Record>> {
        let conn = self.conn.lock().await;
        queries::fetch_all(&conn)
    }

    /// Get the number of stored records
    pub async fn count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        queries::count(&conn)
    }

    /// Run raw SQL against the connection
    #[cfg(test)]
    pub(crate) async fn execute_batch(&self, sql: &str) -> Result<()> {
        let conn = self.conn.lock().await;
        conn.execute_batch(sql)?;
        Ok(())
    }
}
