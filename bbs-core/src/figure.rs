//! Serializable subset of the Plotly figure schema.
//!
//! Only the attributes the dashboard sets are modelled; anything left as
//! `None` is omitted from the JSON so Plotly.js applies its own default.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A complete figure: traces plus layout, ready for `Plotly.react`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(layout: Layout) -> Self {
        Self {
            data: Vec::new(),
            layout,
        }
    }

    pub fn push(&mut self, trace: impl Into<Trace>) {
        self.data.push(trace.into());
    }

    /// All map layers in drawing order.
    pub fn map_traces(&self) -> impl Iterator<Item = &MapTrace> {
        self.data.iter().filter_map(|t| match t {
            Trace::ScatterMapbox(m) => Some(m),
            _ => None,
        })
    }

    /// All cartesian traces in drawing order.
    pub fn xy_traces(&self) -> impl Iterator<Item = &XyTrace> {
        self.data.iter().filter_map(|t| match t {
            Trace::Scatter(xy) | Trace::Bar(xy) => Some(xy),
            _ => None,
        })
    }
}

/// One trace, tagged by the Plotly `type` attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Trace {
    #[serde(rename = "scattermapbox")]
    ScatterMapbox(MapTrace),
    #[serde(rename = "scatter")]
    Scatter(XyTrace),
    #[serde(rename = "bar")]
    Bar(XyTrace),
}

impl From<MapTrace> for Trace {
    fn from(t: MapTrace) -> Self {
        Trace::ScatterMapbox(t)
    }
}

/// Markers on a Mapbox backdrop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapTrace {
    pub mode: String,
    pub lon: Vec<f64>,
    pub lat: Vec<f64>,
    pub text: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customdata: Option<Vec<String>>,
    pub hoverinfo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub marker: Marker,
}

/// Cartesian line or bar trace placed on a facet's axis pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XyTrace {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: Vec<Value>,
    pub y: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legendgroup: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarkerSize {
    Fixed(f64),
    PerPoint(Vec<f64>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarkerColor {
    Fixed(String),
    PerPoint(Vec<f64>),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<MarkerSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<MarkerColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showscale: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowoverlap: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

impl Title {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: None,
        }
    }

    pub fn sized(text: impl Into<String>, size: u32) -> Self {
        Self {
            text: text.into(),
            font: Some(Font { size }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Center {
    pub lat: f64,
    pub lon: f64,
}

/// Mapbox camera and styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mapbox {
    pub accesstoken: String,
    pub style: String,
    pub center: Center,
    pub zoom: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tickvals: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticktext: Option<Vec<String>>,
}

/// Paper-anchored text, used for facet headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub xref: String,
    pub yref: String,
    pub showarrow: bool,
    pub xanchor: String,
    pub yanchor: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapbox: Option<Mapbox>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    /// `xaxis`, `yaxis`, `xaxis2`, ... keyed the way Plotly expects them.
    #[serde(flatten)]
    pub axes: BTreeMap<String, Axis>,
}
