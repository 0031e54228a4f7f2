//! Marker sizes derived from trip counts.

use bbs_core::models::{EndStationRow, StationTripsRow};
use bbs_core::{Error, Result};

/// Smallest drill-down marker; also the size used when all counts are equal.
pub const MIN_MARKER_SIZE: f64 = 10.0;
/// Difference between the largest and smallest drill-down marker.
pub const MARKER_SIZE_SPAN: f64 = 10.0;
/// Floor for overview markers so single-trip stations stay visible.
pub const MIN_OVERVIEW_SIZE: f64 = 1.0;

/// Min-max scale `values` into `[10, 20]`.
///
/// A constant column (including a single value) maps to the lower bound.
pub fn min_max_sizes(values: &[f64]) -> Vec<f64> {
    let Some(min) = values.iter().copied().reduce(f64::min) else {
        return Vec::new();
    };
    let max = values.iter().copied().fold(min, f64::max);
    let range = max - min;
    if range <= 0.0 {
        return vec![MIN_MARKER_SIZE; values.len()];
    }
    values
        .iter()
        .map(|v| MARKER_SIZE_SPAN * (v - min) / range + MIN_MARKER_SIZE)
        .collect()
}

fn checked_count(station: &str, count: i64) -> Result<f64> {
    let value = count as f64;
    if count < 0 || !value.is_finite() {
        return Err(Error::InvalidTripCount {
            station: station.to_string(),
            value,
        });
    }
    Ok(value)
}

/// Drill-down sizes, scaled across the end stations.
pub fn end_station_sizes(rows: &[EndStationRow]) -> Result<Vec<f64>> {
    let counts = rows
        .iter()
        .map(|r| checked_count(&r.station_name, r.trip_count))
        .collect::<Result<Vec<_>>>()?;
    Ok(min_max_sizes(&counts))
}

/// Overview sizes: natural log of the trip count, floored at 1.
pub fn overview_sizes(rows: &[StationTripsRow]) -> Result<Vec<f64>> {
    rows.iter()
        .map(|r| {
            checked_count(&r.station_name, r.n_trips).map(|n| n.ln().max(MIN_OVERVIEW_SIZE))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn end_row(name: &str, trips: i64) -> EndStationRow {
        EndStationRow {
            station_name: name.into(),
            longitude: 0.0,
            latitude: 0.0,
            trip_count: trips,
            percent_member: 0.5,
            median_duration: 10.0,
        }
    }

    #[test]
    fn sizes_span_ten_to_twenty() {
        let sizes = min_max_sizes(&[5.0, 10.0, 15.0]);
        assert_eq!(sizes, vec![10.0, 15.0, 20.0]);
    }

    #[test]
    fn sizes_are_monotonic_and_bounded() {
        let values = [42.0, 3.0, 17.0, 3.0, 99.0, 58.0];
        let sizes = min_max_sizes(&values);
        for (i, a) in values.iter().enumerate() {
            assert!((10.0..=20.0).contains(&sizes[i]));
            for (j, b) in values.iter().enumerate() {
                if a < b {
                    assert!(sizes[i] < sizes[j]);
                }
            }
        }
    }

    #[test]
    fn constant_column_uses_lower_bound() {
        assert_eq!(min_max_sizes(&[7.0, 7.0, 7.0]), vec![10.0; 3]);
        assert_eq!(min_max_sizes(&[3.0]), vec![10.0]);
        assert!(min_max_sizes(&[]).is_empty());
    }

    #[test]
    fn negative_count_is_rejected() {
        let err = end_station_sizes(&[end_row("A", 4), end_row("B", -1)]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidTripCount {
                station: "B".into(),
                value: -1.0
            }
        );
    }

    #[test]
    fn overview_sizes_are_log_with_floor() {
        let rows: Vec<StationTripsRow> = [1, 0, 100]
            .into_iter()
            .map(|n| StationTripsRow {
                station_name: format!("S{}", n),
                latitude: 0.0,
                longitude: 0.0,
                n_trips: n,
            })
            .collect();
        let sizes = overview_sizes(&rows).unwrap();
        assert_eq!(sizes[0], 1.0);
        assert_eq!(sizes[1], 1.0);
        assert!((sizes[2] - 100f64.ln()).abs() < 1e-12);
    }
}
