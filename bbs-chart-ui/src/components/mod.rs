//! Reusable Dioxus RSX components for the bike share pages.

mod chart_container;
mod chart_header;
mod city_selector;
mod data_table;
mod empty_notice;
mod error_display;
mod loading_spinner;
mod nav_bar;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use city_selector::CitySelector;
pub use data_table::{sort_records, DataTable, SortDirection};
pub use empty_notice::EmptyNotice;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use nav_bar::{NavBar, Page};
