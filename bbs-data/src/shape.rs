//! Canonical column sets per query.
//!
//! Warehouse column names vary by backend (`number_of_trips` vs `count`,
//! `SELECT *` relations), so every frame is renamed positionally to a fixed
//! set before anything reads it. A frame with a different column count is
//! rejected.

use bbs_core::{Error, Frame, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub query: &'static str,
    pub columns: &'static [&'static str],
}

pub const TOP_STATIONS: Shape = Shape {
    query: "top_station_by_city",
    columns: &["city", "station_name"],
};

pub const STATION_LOCATION: Shape = Shape {
    query: "station_location",
    columns: &["longitude", "latitude"],
};

pub const END_STATIONS: Shape = Shape {
    query: "end_stations",
    columns: &[
        "station_name",
        "longitude",
        "latitude",
        "Number of Trips",
        "Percent Member",
        "Median Duration",
    ],
};

pub const CITY_STATION_TRIPS: Shape = Shape {
    query: "city_station_trips",
    columns: &["station_name", "latitude", "longitude", "n_trips"],
};

pub const CITY_RIDES: Shape = Shape {
    query: "city_rides",
    columns: &["Month", "City", "Number of Trips"],
};

pub const CITY_SUBSCRIBER_TRIPS: Shape = Shape {
    query: "city_subscriber_trips_cleaned",
    columns: &[
        "Date",
        "Membership Status",
        "City",
        "Number of Trips",
        "Percent of Trips",
    ],
};

pub const CITY_START_HOURS: Shape = Shape {
    query: "city_start_hours",
    columns: &["Start Hour", "City", "Number of Trips"],
};

pub const CITY_DAY_OF_WEEK: Shape = Shape {
    query: "city_day_of_week",
    columns: &["Day of Week", "City", "Number of Trips"],
};

impl Shape {
    /// Rename the frame's columns to this shape's canonical names.
    pub fn apply(&self, mut frame: Frame) -> Result<Frame> {
        if frame.width() != self.columns.len() {
            return Err(Error::ColumnArity {
                query: self.query,
                expected: self.columns.len(),
                found: frame.width(),
            });
        }
        frame.columns = self.columns.iter().map(|c| c.to_string()).collect();
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bbs_core::Cell;

    #[test]
    fn renames_positionally() {
        let frame = Frame {
            columns: vec!["longitude".into(), "lat".into()],
            rows: vec![vec![Cell::Float(-71.0), Cell::Float(42.0)]],
        };
        let shaped = STATION_LOCATION.apply(frame).unwrap();
        assert_eq!(shaped.columns, vec!["longitude", "latitude"]);
        assert_eq!(shaped.len(), 1);
    }

    #[test]
    fn arity_mismatch_is_error() {
        let frame = Frame::new(vec!["a".into(), "b".into(), "c".into()]);
        let err = END_STATIONS.apply(frame).unwrap_err();
        assert_eq!(
            err,
            Error::ColumnArity {
                query: "end_stations",
                expected: 6,
                found: 3
            }
        );
    }
}
