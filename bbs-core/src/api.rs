//! HTTP request and response bodies shared by the server and the pages.

use crate::city::City;
use crate::events::{DashboardEvent, SelectionInputs, Trigger};
use crate::figure::Figure;
use crate::table::TablePayload;
use serde::{Deserialize, Serialize};

/// Why a view has nothing to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyReason {
    /// The reference table has no station for the selected city.
    NoReferenceStation,
    /// The selected station has no location row.
    UnknownStation,
    /// The dependent query returned zero rows.
    NoTrips,
}

/// Overview (all stations of a city) map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Overview {
    Rendered { city: City, figure: Figure },
    Empty { city: City },
}

impl Overview {
    pub fn figure(&self) -> Option<&Figure> {
        match self {
            Overview::Rendered { figure, .. } => Some(figure),
            Overview::Empty { .. } => None,
        }
    }
}

/// Detail map plus table for the focal station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Drilldown {
    Rendered {
        station: String,
        figure: Figure,
        table: TablePayload,
    },
    Empty {
        station: Option<String>,
        reason: EmptyReason,
    },
}

impl Drilldown {
    pub fn is_empty(&self) -> bool {
        matches!(self, Drilldown::Empty { .. })
    }

    pub fn station(&self) -> Option<&str> {
        match self {
            Drilldown::Rendered { station, .. } => Some(station),
            Drilldown::Empty { station, .. } => station.as_deref(),
        }
    }
}

/// `POST /api/event` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRequest {
    pub inputs: SelectionInputs,
    pub event: DashboardEvent,
}

/// Result of handling one event (or the initial page load).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventResponse {
    pub inputs: SelectionInputs,
    pub trigger: Trigger,
    /// Present when the overview map had to be redrawn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<Overview>,
    pub drilldown: Drilldown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedChart {
    pub id: String,
    pub figure: Figure,
}

/// `GET /api/charts` body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartsResponse {
    pub charts: Vec<NamedChart>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
