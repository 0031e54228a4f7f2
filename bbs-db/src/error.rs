/// Error types for warehouse access
use thiserror::Error;

/// Failure of a single warehouse call. None of these are retried.
#[derive(Error, Debug)]
pub enum WarehouseError {
    /// Could not open a connection (network, TLS or authentication)
    #[error("Failed to connect to warehouse: {0}")]
    Connect(String),

    /// Statement failed on the embedded SQLite backend
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Statement failed on the Redshift/PostgreSQL backend
    #[error("Postgres error: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    /// A result column has a type the frame cannot hold
    #[error("Column '{column}' has unsupported type {ty}")]
    UnsupportedType { column: String, ty: String },

    /// Another thread panicked while holding the shared SQLite connection
    #[error("SQLite connection lock poisoned")]
    Poisoned,

    /// The blocking task running a SQLite query panicked or was cancelled
    #[error("SQLite query task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Type alias for Results using WarehouseError
pub type Result<T> = std::result::Result<T, WarehouseError>;
