//! CSV loading for the embedded SQLite warehouse.
//!
//! Each loader parses CSV text and inserts rows into the matching base table
//! inside one transaction. The reference views are derived, so loading the
//! two base tables is enough for every dashboard query.
//!
//! # CSV Formats
//!
//! - **Stations** (has headers): `station_id,station_name,longitude,latitude,city`
//! - **Trips** (has headers): `ride_id,started_at,start_station_id,end_station_id,member_casual,duration`

use crate::Database;
use bbs_core::City;
use chrono::NaiveDateTime;
use rusqlite::params;

const STARTED_AT_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const STORED_STARTED_AT: &str = "%Y-%m-%d %H:%M:%S";

/// Accept either a space or `T` separator; store the space form.
fn normalize_started_at(raw: &str) -> Option<String> {
    STARTED_AT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|ts| ts.format(STORED_STARTED_AT).to_string())
}

impl Database {
    /// Load station reference data from CSV string. Returns rows inserted.
    ///
    /// Rows with an unknown city or unparseable coordinates are skipped.
    ///
    /// # Example CSV
    /// ```text
    /// station_id,station_name,longitude,latitude,city
    /// A32,Central Park,-71.06,42.35,Boston
    /// ```
    pub fn load_stations(&self, csv_data: &str) -> anyhow::Result<usize> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0usize;
        let mut skipped = 0usize;
        for result in rdr.records() {
            let r = result?;
            let station_id = r.get(0).unwrap_or("").trim();
            let name = r.get(1).unwrap_or("").trim();
            let longitude: Option<f64> = r.get(2).and_then(|s| s.trim().parse().ok());
            let latitude: Option<f64> = r.get(3).and_then(|s| s.trim().parse().ok());
            let city = r.get(4).and_then(|s| s.trim().parse::<City>().ok());

            let (Some(longitude), Some(latitude), Some(city)) = (longitude, latitude, city) else {
                skipped += 1;
                continue;
            };
            if station_id.is_empty() || name.is_empty() {
                skipped += 1;
                continue;
            }

            tx.execute(
                "INSERT OR REPLACE INTO stations (station_id, station_name, longitude, latitude, city)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![station_id, name, longitude, latitude, city.as_str()],
            )?;
            count += 1;
        }
        tx.commit()?;
        log::info!("[BBS Debug] loader: Loaded {} stations, skipped {}", count, skipped);
        Ok(count)
    }

    /// Load trips from CSV string. Returns rows inserted.
    ///
    /// `started_at` may use a space or `T` between date and time. `duration`
    /// is in minutes. Rows with a bad timestamp, a non-numeric or negative
    /// duration, or a missing station id are skipped.
    ///
    /// # Example CSV
    /// ```text
    /// ride_id,started_at,start_station_id,end_station_id,member_casual,duration
    /// r1,2023-05-01 08:15:00,A32,B10,member,12.5
    /// ```
    pub fn load_trips(&self, csv_data: &str) -> anyhow::Result<usize> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0usize;
        let mut skipped = 0usize;
        for result in rdr.records() {
            let r = result?;
            let ride_id = r.get(0).unwrap_or("").trim();
            let started_at = normalize_started_at(r.get(1).unwrap_or("").trim());
            let start_station = r.get(2).unwrap_or("").trim();
            let end_station = r.get(3).unwrap_or("").trim();
            let member_casual = r.get(4).unwrap_or("").trim();
            let duration: Option<f64> = r
                .get(5)
                .and_then(|s| s.trim().parse().ok())
                .filter(|d: &f64| d.is_finite() && *d >= 0.0);

            let (Some(started_at), Some(duration)) = (started_at, duration) else {
                skipped += 1;
                continue;
            };
            if ride_id.is_empty() || start_station.is_empty() || end_station.is_empty() {
                skipped += 1;
                continue;
            }

            tx.execute(
                "INSERT OR REPLACE INTO trips
                 (ride_id, started_at, start_station_id, end_station_id, member_casual, duration)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![ride_id, started_at, start_station, end_station, member_casual, duration],
            )?;
            count += 1;
        }
        tx.commit()?;
        log::info!("[BBS Debug] loader: Loaded {} trips, skipped {}", count, skipped);
        Ok(count)
    }
}
