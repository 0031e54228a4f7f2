//! Typed rows out of warehouse frames.
//!
//! Each function shapes the frame first, so a backend returning a different
//! column count fails here with `ColumnArity` instead of misreading cells.

use crate::shape;
use bbs_core::models::{
    CityMonthTrips, Coordinates, EndStationRow, HourTrips, MembershipShare, StationTripsRow,
    TopStation, WeekdayTrips,
};
use bbs_core::{Frame, Result};

pub fn top_stations(frame: Frame) -> Result<Vec<TopStation>> {
    let f = shape::TOP_STATIONS.apply(frame)?;
    (0..f.len())
        .map(|r| {
            Ok(TopStation {
                city: f.str_at(r, 0)?.to_string(),
                station_name: f.str_at(r, 1)?.to_string(),
            })
        })
        .collect()
}

/// Location of a station. The first row wins; no row means unknown station.
pub fn station_location(frame: Frame) -> Result<Option<Coordinates>> {
    let f = shape::STATION_LOCATION.apply(frame)?;
    if f.len() > 1 {
        log::warn!("[BBS Debug] rows: {} location rows for one station, using the first", f.len());
    }
    if f.is_empty() {
        return Ok(None);
    }
    Ok(Some(Coordinates {
        longitude: f.f64_at(0, 0)?,
        latitude: f.f64_at(0, 1)?,
    }))
}

pub fn end_stations(frame: Frame) -> Result<Vec<EndStationRow>> {
    let f = shape::END_STATIONS.apply(frame)?;
    (0..f.len())
        .map(|r| {
            Ok(EndStationRow {
                station_name: f.str_at(r, 0)?.to_string(),
                longitude: f.f64_at(r, 1)?,
                latitude: f.f64_at(r, 2)?,
                trip_count: f.i64_at(r, 3)?,
                percent_member: f.f64_at(r, 4)?,
                median_duration: f.f64_at(r, 5)?,
            })
        })
        .collect()
}

pub fn city_station_trips(frame: Frame) -> Result<Vec<StationTripsRow>> {
    let f = shape::CITY_STATION_TRIPS.apply(frame)?;
    (0..f.len())
        .map(|r| {
            Ok(StationTripsRow {
                station_name: f.str_at(r, 0)?.to_string(),
                latitude: f.f64_at(r, 1)?,
                longitude: f.f64_at(r, 2)?,
                // missing counts become zero
                n_trips: if f.cell(r, 3).is_some_and(|c| c.is_null()) {
                    0
                } else {
                    f.i64_at(r, 3)?
                },
            })
        })
        .collect()
}

pub fn city_rides(frame: Frame) -> Result<Vec<CityMonthTrips>> {
    let f = shape::CITY_RIDES.apply(frame)?;
    (0..f.len())
        .map(|r| {
            Ok(CityMonthTrips {
                month: f.str_at(r, 0)?.to_string(),
                city: f.str_at(r, 1)?.to_string(),
                trips: f.i64_at(r, 2)?,
            })
        })
        .collect()
}

pub fn membership_shares(frame: Frame) -> Result<Vec<MembershipShare>> {
    let f = shape::CITY_SUBSCRIBER_TRIPS.apply(frame)?;
    (0..f.len())
        .map(|r| {
            Ok(MembershipShare {
                date: f.str_at(r, 0)?.to_string(),
                status: f.str_at(r, 1)?.to_string(),
                city: f.str_at(r, 2)?.to_string(),
                trips: f.i64_at(r, 3)?,
                percent: f.f64_at(r, 4)?,
            })
        })
        .collect()
}

pub fn start_hours(frame: Frame) -> Result<Vec<HourTrips>> {
    let f = shape::CITY_START_HOURS.apply(frame)?;
    (0..f.len())
        .map(|r| {
            Ok(HourTrips {
                hour: f.i64_at(r, 0)?,
                city: f.str_at(r, 1)?.to_string(),
                trips: f.i64_at(r, 2)?,
            })
        })
        .collect()
}

pub fn day_of_week(frame: Frame) -> Result<Vec<WeekdayTrips>> {
    let f = shape::CITY_DAY_OF_WEEK.apply(frame)?;
    (0..f.len())
        .map(|r| {
            Ok(WeekdayTrips {
                day_of_week: f.i64_at(r, 0)?,
                city: f.str_at(r, 1)?.to_string(),
                trips: f.i64_at(r, 2)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bbs_core::{Cell, Error};

    fn frame(columns: &[&str], rows: Vec<Vec<Cell>>) -> Frame {
        Frame {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    #[test]
    fn end_station_rows_extracted() {
        let f = frame(
            &["station_name", "longitude", "latitude", "number_of_trips", "percent_member", "median_duration"],
            vec![vec![
                Cell::from("Kendall T"),
                Cell::Float(-71.08),
                Cell::Float(42.36),
                Cell::Int(12),
                Cell::Float(0.8333),
                Cell::Float(9.5),
            ]],
        );
        let rows = end_stations(f).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].station_name, "Kendall T");
        assert_eq!(rows[0].trip_count, 12);
        assert!((rows[0].median_duration - 9.5).abs() < f64::EPSILON);
    }

    #[test]
    fn first_location_row_wins() {
        let f = frame(
            &["longitude", "latitude"],
            vec![
                vec![Cell::Float(-71.0), Cell::Float(42.0)],
                vec![Cell::Float(-72.0), Cell::Float(43.0)],
            ],
        );
        let c = station_location(f).unwrap().unwrap();
        assert_eq!(c.longitude, -71.0);
        assert_eq!(c.latitude, 42.0);
    }

    #[test]
    fn no_location_row_is_none() {
        let f = frame(&["longitude", "latitude"], vec![]);
        assert_eq!(station_location(f).unwrap(), None);
    }

    #[test]
    fn null_trip_count_becomes_zero() {
        let f = frame(
            &["station_name", "latitude", "longitude", "n_trips"],
            vec![vec![Cell::from("A"), Cell::Float(42.0), Cell::Float(-71.0), Cell::Null]],
        );
        assert_eq!(city_station_trips(f).unwrap()[0].n_trips, 0);
    }

    #[test]
    fn text_in_numeric_column_is_type_error() {
        let f = frame(
            &["Start Hour", "City", "Number of Trips"],
            vec![vec![Cell::from("eight"), Cell::from("Boston"), Cell::Int(3)]],
        );
        assert!(matches!(start_hours(f), Err(Error::ColumnType { .. })));
    }

    #[test]
    fn wrong_arity_rejected_before_reading() {
        let f = frame(&["city"], vec![vec![Cell::from("Boston")]]);
        assert!(matches!(top_stations(f), Err(Error::ColumnArity { .. })));
    }
}
