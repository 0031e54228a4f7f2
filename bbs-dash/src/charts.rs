//! Static city-faceted charts for the visualizations page.
//!
//! Each chart puts one panel per city side by side. Panel `i` (1-based) uses
//! the axis pair `x{i}`/`y{i}`; the first pair is plain `x`/`y` as Plotly
//! expects.

use crate::error::Result;
use bbs_core::api::{ChartsResponse, NamedChart};
use bbs_core::figure::{Annotation, Axis, Figure, Layout, Title, Trace, XyTrace};
use bbs_core::models::{CityMonthTrips, HourTrips, MembershipShare, WeekdayTrips};
use bbs_data::rows;
use bbs_db::{catalog, Warehouse};
use serde_json::Value;

pub const CHART_TITLE_SIZE: u32 = 30;
/// Horizontal gap between facet panels, as a fraction of the plot width.
pub const FACET_SPACING: f64 = 0.03;
pub const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const TRIPS_BY_MONTH_ID: &str = "n-trips-graph";
pub const MEMBERSHIP_ID: &str = "n-trips-graph-subscribers";
pub const START_HOUR_ID: &str = "start-hour";
pub const WEEKDAY_ID: &str = "days";

/// Fetch the four chart datasets and build their figures.
pub async fn build_all(warehouse: &Warehouse) -> Result<ChartsResponse> {
    let dialect = warehouse.dialect();
    let rides = rows::city_rides(warehouse.fetch(&catalog::city_rides(dialect)).await?)?;
    let shares = rows::membership_shares(warehouse.fetch(&catalog::city_subscriber_trips(dialect)).await?)?;
    let hours = rows::start_hours(warehouse.fetch(&catalog::city_start_hours(dialect)).await?)?;
    let days = rows::day_of_week(warehouse.fetch(&catalog::city_day_of_week(dialect)).await?)?;

    Ok(ChartsResponse {
        charts: vec![
            NamedChart {
                id: TRIPS_BY_MONTH_ID.into(),
                figure: trips_by_month(&rides),
            },
            NamedChart {
                id: MEMBERSHIP_ID.into(),
                figure: membership_share(&shares),
            },
            NamedChart {
                id: START_HOUR_ID.into(),
                figure: trips_by_hour(&hours),
            },
            NamedChart {
                id: WEEKDAY_ID.into(),
                figure: trips_by_weekday(&days),
            },
        ],
    })
}

/// Distinct values in first-seen order.
fn facets<'a>(cities: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for city in cities {
        if !seen.contains(&city) {
            seen.push(city);
        }
    }
    seen
}

fn axis_suffix(index: usize) -> String {
    if index == 0 {
        String::new()
    } else {
        (index + 1).to_string()
    }
}

/// Horizontal domain of panel `index` out of `count`.
pub fn facet_domain(index: usize, count: usize) -> [f64; 2] {
    let count = count.max(1);
    let width = (1.0 - FACET_SPACING * (count - 1) as f64) / count as f64;
    let start = index as f64 * (width + FACET_SPACING);
    [start, (start + width).min(1.0)]
}

/// Layout with one axis pair and one header per facet.
fn facet_layout(title: &str, cities: &[&str], x_title: &str, y_title: &str, shared_y: bool) -> Layout {
    let mut layout = Layout {
        title: Some(Title::sized(title, CHART_TITLE_SIZE)),
        ..Default::default()
    };
    for (i, city) in cities.iter().enumerate() {
        let suffix = axis_suffix(i);
        let domain = facet_domain(i, cities.len());
        layout.axes.insert(
            format!("xaxis{}", suffix),
            Axis {
                domain: Some(domain),
                anchor: Some(format!("y{}", suffix)),
                title: Some(Title::plain(x_title)),
                ..Default::default()
            },
        );
        layout.axes.insert(
            format!("yaxis{}", suffix),
            Axis {
                anchor: Some(format!("x{}", suffix)),
                title: (i == 0).then(|| Title::plain(y_title)),
                matches: (shared_y && i > 0).then(|| "y".to_string()),
                ..Default::default()
            },
        );
        layout.annotations.push(Annotation {
            text: format!("City={}", city),
            x: (domain[0] + domain[1]) / 2.0,
            y: 1.0,
            xref: "paper".into(),
            yref: "paper".into(),
            showarrow: false,
            xanchor: "center".into(),
            yanchor: "bottom".into(),
        });
    }
    layout
}

fn line_trace(x: Vec<Value>, y: Vec<f64>, facet: usize) -> XyTrace {
    let suffix = axis_suffix(facet);
    XyTrace {
        mode: Some("lines".into()),
        x,
        y,
        xaxis: Some(format!("x{}", suffix)),
        yaxis: Some(format!("y{}", suffix)),
        showlegend: Some(false),
        ..Default::default()
    }
}

pub fn trips_by_month(rows: &[CityMonthTrips]) -> Figure {
    let cities = facets(rows.iter().map(|r| r.city.as_str()));
    let mut figure = Figure::new(facet_layout(
        "Number of Trips by City and Month",
        &cities,
        "Month",
        "Number of Trips",
        true,
    ));
    for (i, city) in cities.iter().enumerate() {
        let panel: Vec<&CityMonthTrips> = rows.iter().filter(|r| r.city == *city).collect();
        figure.data.push(Trace::Scatter(line_trace(
            panel.iter().map(|r| Value::from(r.month.clone())).collect(),
            panel.iter().map(|r| r.trips as f64).collect(),
            i,
        )));
    }
    figure
}

/// One line per membership status in every panel; each status keeps one
/// legend entry across panels.
pub fn membership_share(rows: &[MembershipShare]) -> Figure {
    let cities = facets(rows.iter().map(|r| r.city.as_str()));
    let statuses = facets(rows.iter().map(|r| r.status.as_str()));
    let mut figure = Figure::new(facet_layout(
        "Percent of Trips by City and Member Status",
        &cities,
        "Date",
        "Percent of Trips",
        false,
    ));
    for status in &statuses {
        for (i, city) in cities.iter().enumerate() {
            let panel: Vec<&MembershipShare> = rows
                .iter()
                .filter(|r| r.city == *city && r.status == *status)
                .collect();
            if panel.is_empty() {
                continue;
            }
            let mut trace = line_trace(
                panel.iter().map(|r| Value::from(r.date.clone())).collect(),
                panel.iter().map(|r| r.percent).collect(),
                i,
            );
            trace.name = Some(status.to_string());
            trace.legendgroup = Some(status.to_string());
            trace.showlegend = Some(i == 0);
            figure.data.push(Trace::Scatter(trace));
        }
    }
    figure
}

pub fn trips_by_hour(rows: &[HourTrips]) -> Figure {
    let cities = facets(rows.iter().map(|r| r.city.as_str()));
    let mut figure = Figure::new(facet_layout(
        "Number of Trips Started by Hour",
        &cities,
        "Start Hour",
        "Number of Trips",
        false,
    ));
    for (i, city) in cities.iter().enumerate() {
        let panel: Vec<&HourTrips> = rows.iter().filter(|r| r.city == *city).collect();
        figure.data.push(Trace::Scatter(line_trace(
            panel.iter().map(|r| Value::from(r.hour)).collect(),
            panel.iter().map(|r| r.trips as f64).collect(),
            i,
        )));
    }
    figure
}

pub fn trips_by_weekday(rows: &[WeekdayTrips]) -> Figure {
    let cities = facets(rows.iter().map(|r| r.city.as_str()));
    let mut layout = facet_layout(
        "Number of Trips Started by Day",
        &cities,
        "Day of Week",
        "Number of Trips",
        false,
    );
    for (key, axis) in layout.axes.iter_mut() {
        if key.starts_with("xaxis") {
            axis.tickvals = Some((0..7).map(Value::from).collect());
            axis.ticktext = Some(WEEKDAY_NAMES.iter().map(|d| d.to_string()).collect());
        }
    }
    let mut figure = Figure::new(layout);
    for (i, city) in cities.iter().enumerate() {
        let panel: Vec<&WeekdayTrips> = rows.iter().filter(|r| r.city == *city).collect();
        let mut trace = line_trace(
            panel.iter().map(|r| Value::from(r.day_of_week)).collect(),
            panel.iter().map(|r| r.trips as f64).collect(),
            i,
        );
        trace.mode = None;
        figure.data.push(Trace::Bar(trace));
    }
    figure
}
