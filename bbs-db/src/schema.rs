//! SQL schema for the embedded SQLite warehouse.
//!
//! Mirrors the Redshift warehouse: two base tables plus the precomputed
//! relations the dashboard reads. On Redshift those relations are tables
//! refreshed by the ETL; here they are views over the base tables.

/// Returns the full SQL schema as a single batch string.
///
/// **Base tables:**
/// - `stations` - station reference data; `station_name` is the display key
/// - `trips` - one row per ride, `duration` in minutes
///
/// **Reference views:**
/// - `top_station_by_city` - stations ranked by started trips within each city
/// - `city_rides` - trips per month and city
/// - `city_subscriber_trips_cleaned` - monthly trips and share by membership status
/// - `city_start_hours` - trips per start hour and city
/// - `city_day_of_week` - trips per weekday (0 = Sunday) and city
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS stations (
        station_id TEXT PRIMARY KEY,
        station_name TEXT NOT NULL,
        longitude REAL NOT NULL,
        latitude REAL NOT NULL,
        city TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_stations_name ON stations(station_name);
    CREATE INDEX IF NOT EXISTS idx_stations_city ON stations(city);

    CREATE TABLE IF NOT EXISTS trips (
        ride_id TEXT PRIMARY KEY,
        started_at TEXT NOT NULL,
        start_station_id TEXT NOT NULL,
        end_station_id TEXT NOT NULL,
        member_casual TEXT NOT NULL,
        duration REAL NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_trips_start ON trips(start_station_id);
    CREATE INDEX IF NOT EXISTS idx_trips_end ON trips(end_station_id);

    CREATE VIEW IF NOT EXISTS top_station_by_city AS
    SELECT s.city AS city, s.station_name AS station_name, COUNT(t.ride_id) AS n_trips
    FROM stations s
    INNER JOIN trips t ON t.start_station_id = s.station_id
    GROUP BY s.city, s.station_name;

    CREATE VIEW IF NOT EXISTS city_rides AS
    SELECT strftime('%Y-%m-01', t.started_at) AS month, s.city AS city, COUNT(*) AS n_trips
    FROM trips t
    INNER JOIN stations s ON s.station_id = t.start_station_id
    GROUP BY 1, 2;

    CREATE VIEW IF NOT EXISTS city_subscriber_trips_cleaned AS
    WITH monthly AS (
        SELECT strftime('%Y-%m-01', t.started_at) AS date,
               t.member_casual AS member_casual,
               s.city AS city,
               COUNT(*) AS n_trips
        FROM trips t
        INNER JOIN stations s ON s.station_id = t.start_station_id
        GROUP BY 1, 2, 3
    )
    SELECT date, member_casual, city, n_trips,
           100.0 * n_trips / SUM(n_trips) OVER (PARTITION BY date, city) AS percent_trips
    FROM monthly;

    CREATE VIEW IF NOT EXISTS city_start_hours AS
    SELECT CAST(strftime('%H', t.started_at) AS INTEGER) AS start_hour, s.city AS city, COUNT(*) AS n_trips
    FROM trips t
    INNER JOIN stations s ON s.station_id = t.start_station_id
    GROUP BY 1, 2;

    CREATE VIEW IF NOT EXISTS city_day_of_week AS
    SELECT CAST(strftime('%w', t.started_at) AS INTEGER) AS day_of_week, s.city AS city, COUNT(*) AS n_trips
    FROM trips t
    INNER JOIN stations s ON s.station_id = t.start_station_id
    GROUP BY 1, 2;
    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    fn count_objects(conn: &Connection, kind: &str, name: &str) -> i64 {
        conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = ?1 AND name = ?2",
            [kind, name],
            |row| row.get(0),
        )
        .unwrap()
    }

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_tables_and_views() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        for table in ["stations", "trips"] {
            assert_eq!(count_objects(&conn, "table", table), 1, "Table '{}' should exist", table);
        }
        for view in [
            "top_station_by_city",
            "city_rides",
            "city_subscriber_trips_cleaned",
            "city_start_hours",
            "city_day_of_week",
        ] {
            assert_eq!(count_objects(&conn, "view", view), 1, "View '{}' should exist", view);
        }
    }

    #[test]
    fn schema_creates_indexes() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        for idx in [
            "idx_stations_name",
            "idx_stations_city",
            "idx_trips_start",
            "idx_trips_end",
        ] {
            assert_eq!(count_objects(&conn, "index", idx), 1, "Index '{}' should exist", idx);
        }
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }

    #[test]
    fn membership_shares_sum_to_hundred() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(
            "INSERT INTO stations VALUES ('S1', 'One', -71.0, 42.0, 'Boston');
             INSERT INTO trips VALUES ('r1', '2023-05-01 08:00:00', 'S1', 'S1', 'member', 10.0);
             INSERT INTO trips VALUES ('r2', '2023-05-02 09:00:00', 'S1', 'S1', 'member', 12.0);
             INSERT INTO trips VALUES ('r3', '2023-05-03 10:00:00', 'S1', 'S1', 'casual', 20.0);
             INSERT INTO trips VALUES ('r4', '2023-05-04 10:00:00', 'S1', 'S1', 'member', 20.0);",
        )
        .unwrap();
        let member: f64 = conn
            .query_row(
                "SELECT percent_trips FROM city_subscriber_trips_cleaned WHERE member_casual = 'member'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        let total: f64 = conn
            .query_row(
                "SELECT SUM(percent_trips) FROM city_subscriber_trips_cleaned",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!((member - 75.0).abs() < 1e-9);
        assert!((total - 100.0).abs() < 1e-9);
    }
}
