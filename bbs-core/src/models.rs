//! Typed rows extracted from warehouse frames.
//!
//! All structs derive `Serialize` so they can be returned from the JSON API
//! or dumped by the CLI.

use serde::{Deserialize, Serialize};

/// Longitude/latitude pair of a station.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

/// Station reference data. The name doubles as the station key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    pub coordinates: Coordinates,
    pub city: String,
}

/// A row of the `top_station_by_city` reference table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopStation {
    pub city: String,
    pub station_name: String,
}

/// One station on the overview map with its started-trip count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationTripsRow {
    pub station_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub n_trips: i64,
}

/// End-station aggregate for trips starting at the focal station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndStationRow {
    pub station_name: String,
    pub longitude: f64,
    pub latitude: f64,
    /// Number of trips from the focal station ending here.
    pub trip_count: i64,
    /// Fraction (0..=1) of those trips taken by members.
    pub percent_member: f64,
    /// Median trip duration in minutes.
    pub median_duration: f64,
}

/// Monthly trip totals per city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityMonthTrips {
    pub month: String,
    pub city: String,
    pub trips: i64,
}

/// Monthly share of trips by membership status per city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipShare {
    pub date: String,
    pub status: String,
    pub city: String,
    pub trips: i64,
    /// Percent (0..=100) of the city's trips in that month.
    pub percent: f64,
}

/// Trips started per hour of day per city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourTrips {
    pub hour: i64,
    pub city: String,
    pub trips: i64,
}

/// Trips started per day of week (0 = Sunday) per city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayTrips {
    pub day_of_week: i64,
    pub city: String,
    pub trips: i64,
}
