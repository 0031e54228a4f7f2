//! Display table projection.

use bbs_core::models::EndStationRow;
use serde_json::{Map, Value};

/// Columns shown in the drill-down table, in order.
pub const END_STATION_TABLE_COLUMNS: [&str; 4] = [
    "station_name",
    "Number of Trips",
    "Percent Member",
    "Median Duration",
];

/// Round to two decimal places.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn number(v: f64) -> Value {
    serde_json::Number::from_f64(round2(v))
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// Table records for the drill-down: coordinates, size and label dropped,
/// numbers rounded to 2 decimals.
pub fn end_station_records(rows: &[EndStationRow]) -> Vec<Map<String, Value>> {
    rows.iter()
        .map(|r| {
            let mut record = Map::new();
            record.insert(END_STATION_TABLE_COLUMNS[0].into(), Value::from(r.station_name.clone()));
            record.insert(END_STATION_TABLE_COLUMNS[1].into(), Value::from(r.trip_count));
            record.insert(END_STATION_TABLE_COLUMNS[2].into(), number(r.percent_member));
            record.insert(END_STATION_TABLE_COLUMNS[3].into(), number(r.median_duration));
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_drop_helpers_and_round() {
        let rows = vec![EndStationRow {
            station_name: "Kendall T".into(),
            longitude: -71.08,
            latitude: 42.36,
            trip_count: 12,
            percent_member: 0.83333,
            median_duration: 9.499,
        }];
        let records = end_station_records(&rows);
        let r = &records[0];
        assert_eq!(r.len(), 4);
        assert!(r.get("latitude").is_none());
        assert!(r.get("longitude").is_none());
        assert_eq!(r["Number of Trips"], 12);
        assert_eq!(r["Percent Member"], 0.83);
        assert_eq!(r["Median Duration"], 9.5);
    }

    #[test]
    fn nan_median_is_null() {
        let rows = vec![EndStationRow {
            station_name: "A".into(),
            longitude: 0.0,
            latitude: 0.0,
            trip_count: 1,
            percent_member: 1.0,
            median_duration: f64::NAN,
        }];
        assert_eq!(end_station_records(&rows)[0]["Median Duration"], Value::Null);
    }
}
