//! Core types for the bike share dashboard.
//!
//! Everything in this crate is plain data plus serde, so it compiles for both
//! the native server (`bbs-dash`, `bbs-cmd`) and the WASM pages
//! (`bbs-chart-ui`). The server builds these payloads; the pages deserialize
//! them and hand the figures to Plotly.js.
//!
//! - [`city`]: the fixed set of cities offered by the city selector
//! - [`frame`]: untyped tabular query results
//! - [`models`]: typed rows extracted from frames
//! - [`events`]: UI events, click payloads and selection inputs
//! - [`figure`]: a serializable subset of the Plotly figure schema
//! - [`table`]: sortable/paginated table payload
//! - [`api`]: HTTP request/response bodies
//! - [`config`]: environment-driven settings

pub mod api;
pub mod city;
pub mod config;
pub mod error;
pub mod events;
pub mod figure;
pub mod frame;
pub mod models;
pub mod table;

pub use city::City;
pub use error::{Error, Result};
pub use frame::{Cell, Frame};
