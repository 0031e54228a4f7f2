//! Reference data loaded once at start-up.

use crate::charts;
use crate::error::Result;
use bbs_core::api::ChartsResponse;
use bbs_core::models::TopStation;
use bbs_core::City;
use bbs_data::rows;
use bbs_db::{catalog, Warehouse};

/// Immutable reference table plus the static charts.
///
/// Built by [`ReferenceSnapshot::load`] before the server accepts requests
/// and shared read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceSnapshot {
    top_stations: Vec<TopStation>,
    charts: ChartsResponse,
}

impl ReferenceSnapshot {
    pub fn new(top_stations: Vec<TopStation>, charts: ChartsResponse) -> Self {
        Self {
            top_stations,
            charts,
        }
    }

    pub async fn load(warehouse: &Warehouse) -> Result<Self> {
        let frame = warehouse
            .fetch(&catalog::top_station_by_city(warehouse.dialect()))
            .await?;
        let top_stations = rows::top_stations(frame)?;
        let charts = charts::build_all(warehouse).await?;
        log::info!(
            "[BBS Debug] snapshot: {} reference stations, {} charts",
            top_stations.len(),
            charts.charts.len()
        );
        Ok(Self::new(top_stations, charts))
    }

    /// First reference station of `city`, in the table's own order.
    pub fn default_station(&self, city: City) -> Option<&str> {
        self.top_stations
            .iter()
            .find(|row| row.city == city.as_str())
            .map(|row| row.station_name.as_str())
    }

    pub fn charts(&self) -> &ChartsResponse {
        &self.charts
    }
}
