//! Warehouse layer for the bike share dashboard.
//!
//! Every query the dashboard runs is a [`Query`]: SQL text with positional
//! placeholders plus the values to bind. Values are never spliced into the
//! SQL text, so station names such as `O'Hare` are safe.
//!
//! # Backends
//!
//! - [`RedshiftWarehouse`]: the production warehouse, reached over the
//!   PostgreSQL wire protocol with `tokio-postgres`. One connection per query.
//! - [`SqliteWarehouse`]: an embedded SQLite file with the same tables and
//!   reference relations, built from CSV extracts by [`Database`]'s loaders.
//!
//! [`Warehouse`] wraps both and is what the dashboard holds.
//!
//! # Usage
//!
//! ```rust
//! use bbs_db::{catalog, Database, Dialect, Warehouse};
//!
//! let db = Database::new().unwrap();
//! db.load_stations("station_id,station_name,longitude,latitude,city\nA32,Central Park,-71.06,42.35,Boston\n").unwrap();
//!
//! let warehouse = Warehouse::in_memory(db);
//! let query = catalog::station_location(Dialect::Sqlite, "Central Park");
//! let rt = tokio::runtime::Runtime::new().unwrap();
//! let frame = rt.block_on(warehouse.fetch(&query)).unwrap();
//! assert_eq!(frame.len(), 1);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the embedded schema.

pub mod catalog;
mod error;
mod loader;
mod query;
mod redshift;
pub mod schema;
mod sqlite;
mod warehouse;

pub use error::{Result, WarehouseError};
pub use query::{Dialect, Param, Query};
pub use redshift::RedshiftWarehouse;
pub use sqlite::SqliteWarehouse;
pub use warehouse::Warehouse;

use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

/// SQLite database holding the embedded warehouse tables.
///
/// Cheaply cloneable; clones share one connection behind a mutex so an
/// in-memory database can be loaded once and queried from any task.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open (or create) a database file and apply the schema.
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let conn = Connection::open(path.as_ref())?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub(crate) fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| WarehouseError::Poisoned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATIONS_CSV: &str = "\
station_id,station_name,longitude,latitude,city
A32,Central Park,-71.06,42.35,Boston
";

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_stations(STATIONS_CSV).unwrap();
        let count: i64 = db2
            .lock()
            .unwrap()
            .query_row("SELECT COUNT(*) FROM stations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1, "Clone should see same data via shared Arc");
    }

    #[test]
    fn database_file_round_trip() {
        let path = std::env::temp_dir().join(format!("bbs-db-test-{}.sqlite", std::process::id()));
        let _ = std::fs::remove_file(&path);
        {
            let db = Database::open(&path).unwrap();
            db.load_stations(STATIONS_CSV).unwrap();
        }
        let reopened = Database::open(&path).unwrap();
        let count: i64 = reopened
            .lock()
            .unwrap()
            .query_row("SELECT COUNT(*) FROM stations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
        drop(reopened);
        let _ = std::fs::remove_file(&path);
    }
}
