//! UI events and the inputs the station map page holds between them.
//!
//! The page keeps a [`SelectionInputs`] value (selected city plus the last
//! click seen on each map). Every user action is a [`DashboardEvent`];
//! [`SelectionInputs::apply`] folds the event into the inputs and reports the
//! [`Trigger`] so the server can decide which input is authoritative.

use crate::city::City;
use serde::{Deserialize, Serialize};

/// A clicked marker, as Plotly reports it in `clickData.points[n]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClickPoint {
    /// Hover text of the marker (the composite label).
    #[serde(default)]
    pub text: Option<String>,
    /// Station key attached to the marker, when the figure carried one.
    #[serde(default)]
    pub customdata: Option<String>,
}

/// Plotly `clickData` payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClickData {
    #[serde(default)]
    pub points: Vec<ClickPoint>,
}

impl ClickData {
    /// Payload for a single clicked label without a structured key.
    pub fn from_label(text: impl Into<String>) -> Self {
        Self {
            points: vec![ClickPoint {
                text: Some(text.into()),
                customdata: None,
            }],
        }
    }

    /// Payload for a single clicked marker carrying both label and key.
    pub fn from_marker(text: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            points: vec![ClickPoint {
                text: Some(text.into()),
                customdata: Some(key.into()),
            }],
        }
    }

    pub fn first_point(&self) -> Option<&ClickPoint> {
        self.points.first()
    }
}

/// Which input produced the current event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    /// First render of the page, nothing changed yet.
    Initial,
    CitySelect,
    GlobalMap,
    DetailMap,
}

impl Trigger {
    /// Component id of the input, used in logs and error messages.
    pub fn component_id(&self) -> &'static str {
        match self {
            Trigger::Initial => "initial",
            Trigger::CitySelect => "city-select",
            Trigger::GlobalMap => "graph-all",
            Trigger::DetailMap => "graph-specific",
        }
    }
}

/// Current values of the station map page inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionInputs {
    pub city: City,
    #[serde(default)]
    pub global_click: Option<ClickData>,
    #[serde(default)]
    pub detail_click: Option<ClickData>,
}

impl SelectionInputs {
    pub fn for_city(city: City) -> Self {
        Self {
            city,
            global_click: None,
            detail_click: None,
        }
    }

    /// Fold `event` into the inputs.
    ///
    /// Earlier clicks are kept, as the page keeps them; only the trigger
    /// decides which one is read.
    pub fn apply(mut self, event: DashboardEvent) -> (SelectionInputs, Trigger) {
        let trigger = match event {
            DashboardEvent::CitySelected { city } => {
                self.city = city;
                Trigger::CitySelect
            }
            DashboardEvent::GlobalMapClicked { click } => {
                self.global_click = Some(click);
                Trigger::GlobalMap
            }
            DashboardEvent::DetailMapClicked { click } => {
                self.detail_click = Some(click);
                Trigger::DetailMap
            }
        };
        (self, trigger)
    }
}

/// A user action on the station map page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DashboardEvent {
    CitySelected { city: City },
    GlobalMapClicked { click: ClickData },
    DetailMapClicked { click: ClickData },
}

impl DashboardEvent {
    /// Whether the overview map must be redrawn for this event.
    pub fn changes_city(&self) -> bool {
        matches!(self, DashboardEvent::CitySelected { .. })
    }
}
