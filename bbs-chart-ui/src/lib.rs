//! Shared Dioxus components and Plotly.js bridge for the bike share pages.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers that hand figure JSON to Plotly.js via `js_sys::eval()`
//!   and forward `plotly_click` events back to Rust
//! - `api`: client for the dashboard's JSON API
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (city selector, map panels, data table, etc.)

pub mod api;
pub mod components;
pub mod js_bridge;
pub mod state;
