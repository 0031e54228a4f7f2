//! Map figures and the drill-down table.

use crate::error::Result;
use bbs_core::api::{Drilldown, EmptyReason, Overview};
use bbs_core::figure::{
    Center, Figure, Font, Layout, MapTrace, Mapbox, Marker, MarkerColor, MarkerSize, Title,
};
use bbs_core::models::{Coordinates, EndStationRow, StationTripsRow};
use bbs_core::table::{TableColumn, TablePayload, PAGE_SIZE};
use bbs_core::City;
use bbs_data::display::{end_station_records, END_STATION_TABLE_COLUMNS};
use bbs_data::label::composite_label;
use bbs_data::sizing::{end_station_sizes, overview_sizes};

pub const OVERVIEW_ZOOM: f64 = 11.0;
pub const DETAIL_ZOOM: f64 = 12.5;
pub const FIG_HEIGHT: u32 = 650;
pub const FONT_SIZE: u32 = 16;
pub const MAP_STYLE: &str = "dark";
pub const COLORSCALE: &str = "blues";
pub const FOCAL_MARKER_SIZE: f64 = 20.0;

fn map_layout(title: String, center: Center, zoom: f64, mapbox_token: &str) -> Layout {
    Layout {
        title: Some(Title::plain(title)),
        height: Some(FIG_HEIGHT),
        font: Some(Font { size: FONT_SIZE }),
        mapbox: Some(Mapbox {
            accesstoken: mapbox_token.to_string(),
            style: MAP_STYLE.to_string(),
            center,
            zoom,
        }),
        ..Default::default()
    }
}

/// All stations of `city`, centered on the busiest one.
pub fn overview(city: City, rows: &[StationTripsRow], mapbox_token: &str) -> Result<Overview> {
    // first of the busiest, matching the query's descending order
    let Some(busiest) = rows.iter().reduce(|best, r| if r.n_trips > best.n_trips { r } else { best }) else {
        return Ok(Overview::Empty { city });
    };
    let sizes = overview_sizes(rows)?;

    let mut figure = Figure::new(map_layout(
        format!("Top stations in {}", city),
        Center {
            lat: busiest.latitude,
            lon: busiest.longitude,
        },
        OVERVIEW_ZOOM,
        mapbox_token,
    ));
    figure.push(MapTrace {
        mode: "markers".into(),
        lon: rows.iter().map(|r| r.longitude).collect(),
        lat: rows.iter().map(|r| r.latitude).collect(),
        text: rows
            .iter()
            .map(|r| composite_label(&r.station_name, r.n_trips))
            .collect(),
        customdata: Some(rows.iter().map(|r| r.station_name.clone()).collect()),
        hoverinfo: "text".into(),
        name: None,
        marker: Marker {
            size: Some(MarkerSize::PerPoint(sizes)),
            color: Some(MarkerColor::PerPoint(rows.iter().map(|r| r.n_trips as f64).collect())),
            colorscale: Some(COLORSCALE.into()),
            showscale: Some(true),
            ..Default::default()
        },
    });
    Ok(Overview::Rendered { city, figure })
}

/// Top end stations from `station`, plus the focal station highlighted.
pub fn drilldown(
    station: &str,
    focal: Coordinates,
    rows: &[EndStationRow],
    mapbox_token: &str,
) -> Result<Drilldown> {
    if rows.is_empty() {
        return Ok(Drilldown::Empty {
            station: Some(station.to_string()),
            reason: EmptyReason::NoTrips,
        });
    }
    let sizes = end_station_sizes(rows)?;

    let mut layout = map_layout(
        format!("Top 25 Stations from {}", station),
        Center {
            lat: focal.latitude,
            lon: focal.longitude,
        },
        DETAIL_ZOOM,
        mapbox_token,
    );
    layout.showlegend = Some(false);
    let mut figure = Figure::new(layout);

    figure.push(MapTrace {
        mode: "markers".into(),
        lon: rows.iter().map(|r| r.longitude).collect(),
        lat: rows.iter().map(|r| r.latitude).collect(),
        text: rows
            .iter()
            .map(|r| composite_label(&r.station_name, r.trip_count))
            .collect(),
        customdata: Some(rows.iter().map(|r| r.station_name.clone()).collect()),
        hoverinfo: "text".into(),
        name: None,
        marker: Marker {
            size: Some(MarkerSize::PerPoint(sizes)),
            color: Some(MarkerColor::PerPoint(rows.iter().map(|r| r.trip_count as f64).collect())),
            colorscale: Some(COLORSCALE.into()),
            showscale: Some(true),
            allowoverlap: Some(false),
            ..Default::default()
        },
    });
    figure.push(MapTrace {
        mode: "markers".into(),
        lon: vec![focal.longitude; 2],
        lat: vec![focal.latitude; 2],
        text: vec![station.to_string(); 2],
        customdata: Some(vec![station.to_string(); 2]),
        hoverinfo: "text".into(),
        name: Some(station.to_string()),
        marker: Marker {
            size: Some(MarkerSize::Fixed(FOCAL_MARKER_SIZE)),
            symbol: Some("marker".into()),
            ..Default::default()
        },
    });

    Ok(Drilldown::Rendered {
        station: station.to_string(),
        figure,
        table: end_station_table(station, rows),
    })
}

pub fn end_station_table(station: &str, rows: &[EndStationRow]) -> TablePayload {
    TablePayload {
        heading: format!("Top 25 stations from {}", station),
        explanation: explanation(station),
        columns: END_STATION_TABLE_COLUMNS
            .iter()
            .map(|c| TableColumn {
                name: c.to_string(),
                id: c.to_string(),
            })
            .collect(),
        data: end_station_records(rows),
        sort_action: "native".into(),
        page_size: PAGE_SIZE,
    }
}

fn explanation(station: &str) -> String {
    format!(
        "The following table summarizes the end stations of trips beginning at the station located at {}. \
         Member percent is the percent of rides done by a member of the bike share program, as opposed to a customer on a one time trip.\n\n\
         Because the data does not contain the exact route followed, the trip distance metric is the distance \"as the crow flies.\" \
         As such, the distance travelled by bike is always larger than found below. \
         Relatedly, the median trip speed will also be lower than described.",
        station
    )
}
