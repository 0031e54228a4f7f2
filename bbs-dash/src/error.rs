/// Error types for dashboard request handling
use bbs_db::WarehouseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    /// The warehouse could not be reached or rejected a query
    #[error(transparent)]
    Warehouse(#[from] WarehouseError),

    /// The UI inputs did not identify a station (missing click, bad label)
    #[error("Selection failed: {0}")]
    Selection(#[source] bbs_core::Error),

    /// A query result did not have the expected shape or values
    #[error(transparent)]
    Data(#[from] bbs_core::Error),
}

impl DashError {
    /// True when the caller sent input that cannot be resolved.
    pub fn is_selection(&self) -> bool {
        matches!(self, DashError::Selection(_))
    }
}

/// Type alias for Results using DashError
pub type Result<T> = std::result::Result<T, DashError>;
