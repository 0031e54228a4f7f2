//! Request handling for the station map page.

use crate::error::Result;
use crate::render;
use crate::selection;
use crate::snapshot::ReferenceSnapshot;
use bbs_core::api::{Drilldown, EmptyReason, EventResponse, Overview};
use bbs_core::events::{DashboardEvent, SelectionInputs, Trigger};
use bbs_core::City;
use bbs_data::rows;
use bbs_db::{catalog, Warehouse};
use std::sync::Arc;

/// Everything a request handler needs. Cheap to clone.
#[derive(Clone)]
pub struct Dashboard {
    warehouse: Warehouse,
    snapshot: Arc<ReferenceSnapshot>,
    mapbox_token: String,
}

impl Dashboard {
    pub fn new(warehouse: Warehouse, snapshot: Arc<ReferenceSnapshot>, mapbox_token: String) -> Self {
        Self {
            warehouse,
            snapshot,
            mapbox_token,
        }
    }

    /// Load the reference snapshot, then build the dashboard around it.
    pub async fn start(warehouse: Warehouse, mapbox_token: String) -> Result<Self> {
        let snapshot = ReferenceSnapshot::load(&warehouse).await?;
        Ok(Self::new(warehouse, Arc::new(snapshot), mapbox_token))
    }

    pub fn snapshot(&self) -> &ReferenceSnapshot {
        &self.snapshot
    }

    /// Overview map of every station in `city`.
    pub async fn overview(&self, city: City) -> Result<Overview> {
        let frame = self
            .warehouse
            .fetch(&catalog::city_station_trips(self.warehouse.dialect(), city))
            .await?;
        let stations = rows::city_station_trips(frame)?;
        render::overview(city, &stations, &self.mapbox_token)
    }

    /// Detail map and table for trips starting at `station`.
    pub async fn drilldown(&self, station: &str) -> Result<Drilldown> {
        let dialect = self.warehouse.dialect();
        let location = self
            .warehouse
            .fetch(&catalog::station_location(dialect, station))
            .await?;
        let Some(focal) = rows::station_location(location)? else {
            log::warn!("[BBS Debug] dashboard: no location for station {:?}", station);
            return Ok(Drilldown::Empty {
                station: Some(station.to_string()),
                reason: EmptyReason::UnknownStation,
            });
        };

        let frame = self
            .warehouse
            .fetch(&catalog::end_stations(dialect, station))
            .await?;
        let end_stations = rows::end_stations(frame)?;
        render::drilldown(station, focal, &end_stations, &self.mapbox_token)
    }

    /// Fold `event` into `inputs` and produce the views it affects.
    ///
    /// The overview map is only redrawn when the city changed; the drill-down
    /// is recomputed for every event.
    pub async fn handle(&self, inputs: SelectionInputs, event: DashboardEvent) -> Result<EventResponse> {
        let redraw_overview = event.changes_city();
        let (inputs, trigger) = inputs.apply(event);
        self.respond(inputs, trigger, redraw_overview).await
    }

    /// First render of the page for `city`: both maps.
    pub async fn initial(&self, city: City) -> Result<EventResponse> {
        self.respond(SelectionInputs::for_city(city), Trigger::Initial, true)
            .await
    }

    async fn respond(
        &self,
        inputs: SelectionInputs,
        trigger: Trigger,
        with_overview: bool,
    ) -> Result<EventResponse> {
        let overview = if with_overview {
            Some(self.overview(inputs.city).await?)
        } else {
            None
        };
        let drilldown = match selection::resolve(&inputs, trigger, &self.snapshot)? {
            Some(station) => self.drilldown(&station).await?,
            None => Drilldown::Empty {
                station: None,
                reason: EmptyReason::NoReferenceStation,
            },
        };
        Ok(EventResponse {
            inputs,
            trigger,
            overview,
            drilldown,
        })
    }
}
