//! Station map and visualizations logic for the bike share dashboard.
//!
//! A request flows resolve → query → shape → render:
//!
//! - [`selection`] picks the focal station from the page inputs
//! - `bbs-db` runs the dependent queries
//! - `bbs-data` shapes the frames into typed rows
//! - [`render`] and [`charts`] build Plotly figures and the table payload
//!
//! [`Dashboard`] ties these together around an immutable
//! [`ReferenceSnapshot`] that is loaded once at start-up.

pub mod charts;
pub mod dashboard;
pub mod error;
pub mod render;
pub mod selection;
pub mod snapshot;

pub use dashboard::Dashboard;
pub use error::{DashError, Result};
pub use snapshot::ReferenceSnapshot;
