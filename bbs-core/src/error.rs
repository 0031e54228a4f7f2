/// Error types shared by the dashboard crates
use thiserror::Error;

/// Errors raised while interpreting query results and UI input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// City name not in the selector list
    #[error("Unknown city: {0}")]
    UnknownCity(String),

    /// A query returned a different number of columns than its shape expects
    #[error("Query '{query}' returned {found} columns, expected {expected}")]
    ColumnArity {
        query: &'static str,
        expected: usize,
        found: usize,
    },

    /// A cell could not be read as the requested type
    #[error("Column '{column}' row {row}: expected {expected}")]
    ColumnType {
        column: String,
        row: usize,
        expected: &'static str,
    },

    /// Trip counts must be finite and non-negative to size markers
    #[error("Invalid trip count {value} for station '{station}'")]
    InvalidTripCount { station: String, value: f64 },

    /// Click label did not contain the " (<digit>" suffix
    #[error("Malformed station label: {0:?}")]
    MalformedLabel(String),

    /// The triggering click payload carried no usable point
    #[error("Click payload from {0} has no point")]
    MissingClickPoint(&'static str),

    /// Missing or invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for Results using the core Error
pub type Result<T> = std::result::Result<T, Error>;
