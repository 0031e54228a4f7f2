//! Embedded SQLite backend.

use crate::error::{Result, WarehouseError};
use crate::query::Query;
use crate::Database;
use bbs_core::{Cell, Frame};
use rusqlite::types::ValueRef;
use rusqlite::{params_from_iter, Connection};
use std::path::PathBuf;

/// Where the SQLite warehouse lives.
#[derive(Clone)]
pub enum SqliteSource {
    /// A database file, opened read-only for each query.
    File(PathBuf),
    /// An already-open database shared by clones, used for tests and fixtures.
    Shared(Database),
}

#[derive(Clone)]
pub struct SqliteWarehouse {
    source: SqliteSource,
}

impl SqliteWarehouse {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: SqliteSource::File(path.into()),
        }
    }

    pub fn shared(db: Database) -> Self {
        Self {
            source: SqliteSource::Shared(db),
        }
    }

    /// Run `query` and collect every row into a [`Frame`].
    ///
    /// Blocking; `Warehouse::fetch` runs it on tokio's blocking pool.
    pub fn fetch(&self, query: &Query) -> Result<Frame> {
        match &self.source {
            SqliteSource::File(path) => {
                let conn = Connection::open_with_flags(
                    path,
                    rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY
                        | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
                )
                .map_err(|e| WarehouseError::Connect(format!("{}: {}", path.display(), e)))?;
                run(&conn, query)
            }
            SqliteSource::Shared(db) => {
                let conn = db.lock()?;
                run(&conn, query)
            }
        }
    }
}

fn run(conn: &Connection, query: &Query) -> Result<Frame> {
    let mut stmt = conn.prepare(&query.sql)?;
    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let width = columns.len();
    let mut frame = Frame::new(columns);

    let mut rows = stmt.query(params_from_iter(query.params.iter()))?;
    while let Some(row) = rows.next()? {
        let mut cells = Vec::with_capacity(width);
        for idx in 0..width {
            cells.push(to_cell(row.get_ref(idx)?, &frame.columns[idx])?);
        }
        frame.rows.push(cells);
    }
    Ok(frame)
}

fn to_cell(value: ValueRef<'_>, column: &str) -> Result<Cell> {
    Ok(match value {
        ValueRef::Null => Cell::Null,
        ValueRef::Integer(v) => Cell::Int(v),
        ValueRef::Real(v) => Cell::Float(v),
        ValueRef::Text(bytes) => Cell::Text(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(_) => {
            return Err(WarehouseError::UnsupportedType {
                column: column.to_string(),
                ty: "BLOB".to_string(),
            })
        }
    })
}
