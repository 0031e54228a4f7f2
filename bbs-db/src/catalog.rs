//! Every query the dashboard issues.
//!
//! Builders take the backend [`Dialect`] and return a [`Query`] whose SQL only
//! differs between dialects in placeholder syntax and in the functions SQLite
//! lacks (`PERCENTILE_CONT`, `::` casts). Postgres-dialect queries cast every
//! numeric result to `int8` or `float8` so rows decode without `NUMERIC`
//! support. User-supplied values always travel as bound parameters.

use crate::query::{Dialect, Query};
use bbs_core::City;

/// Number of end stations shown in the drill-down.
pub const END_STATION_LIMIT: usize = 25;

/// Reference table: top stations per city, best first within a city.
///
/// Ordered explicitly on both backends; Redshift scan order is not stable
/// across slices.
pub fn top_station_by_city(_dialect: Dialect) -> Query {
    Query::new(
        "top_station_by_city",
        "SELECT city, station_name FROM top_station_by_city \
         ORDER BY city, n_trips DESC, station_name",
    )
}

/// Longitude and latitude of a station, looked up by display name.
pub fn station_location(dialect: Dialect, station: &str) -> Query {
    let p1 = dialect.placeholder(1);
    Query::new(
        "station_location",
        format!(
            "SELECT longitude, latitude FROM stations WHERE station_name = {}",
            p1
        ),
    )
    .bind(station)
}

/// Top end stations for trips started at `station`, with trip count, member
/// share (0..1) and median duration.
pub fn end_stations(dialect: Dialect, station: &str) -> Query {
    let p1 = dialect.placeholder(1);
    let sql = match dialect {
        Dialect::Postgres => format!(
            "SELECT s.station_name, s.longitude, s.latitude, COUNT(ride_id) AS number_of_trips,
                    AVG(CASE WHEN member_casual = 'member' THEN 1.00 ELSE 0.00 END)::float8 AS percent_member,
                    (PERCENTILE_CONT(0.5) WITHIN GROUP (ORDER BY t.duration))::float8 AS median_duration
             FROM trips t
             INNER JOIN stations s ON t.end_station_id = s.station_id
             INNER JOIN stations s2 ON s2.station_id = t.start_station_id
             WHERE s2.station_name = {p1}
             GROUP BY s.station_name, s.longitude, s.latitude
             ORDER BY 4 DESC
             LIMIT {limit}",
            p1 = p1,
            limit = END_STATION_LIMIT
        ),
        Dialect::Sqlite => format!(
            "WITH dest AS (
                 SELECT s.station_name, s.longitude, s.latitude, t.ride_id, t.member_casual, t.duration,
                        ROW_NUMBER() OVER (PARTITION BY s.station_name, s.longitude, s.latitude ORDER BY t.duration) AS rn,
                        COUNT(*) OVER (PARTITION BY s.station_name, s.longitude, s.latitude) AS cnt
                 FROM trips t
                 INNER JOIN stations s ON t.end_station_id = s.station_id
                 INNER JOIN stations s2 ON s2.station_id = t.start_station_id
                 WHERE s2.station_name = {p1}
             )
             SELECT station_name, longitude, latitude, COUNT(ride_id) AS number_of_trips,
                    AVG(CASE WHEN member_casual = 'member' THEN 1.0 ELSE 0.0 END) AS percent_member,
                    AVG(CASE WHEN rn IN ((cnt + 1) / 2, (cnt + 2) / 2) THEN duration END) AS median_duration
             FROM dest
             GROUP BY station_name, longitude, latitude
             ORDER BY 4 DESC, 1
             LIMIT {limit}",
            p1 = p1,
            limit = END_STATION_LIMIT
        ),
    };
    Query::new("end_stations", sql).bind(station)
}

/// Every station of `city` with at least one started trip, busiest first.
pub fn city_station_trips(dialect: Dialect, city: City) -> Query {
    let p1 = dialect.placeholder(1);
    Query::new(
        "city_station_trips",
        format!(
            "SELECT s.station_name, s.latitude, s.longitude, n_trips
             FROM stations s
             INNER JOIN (
                 SELECT start_station_id, COUNT(start_station_id) AS n_trips
                 FROM trips GROUP BY start_station_id
             ) trip_count_subquery
             ON s.station_id = trip_count_subquery.start_station_id
             WHERE city = {}
             ORDER BY n_trips DESC",
            p1
        ),
    )
    .bind(city.as_str())
}

pub fn city_rides(dialect: Dialect) -> Query {
    let sql = match dialect {
        Dialect::Postgres => "SELECT month, city, n_trips::int8 AS n_trips FROM city_rides ORDER BY 2, 1",
        Dialect::Sqlite => "SELECT * FROM city_rides ORDER BY 2, 1",
    };
    Query::new("city_rides", sql)
}

pub fn city_subscriber_trips(dialect: Dialect) -> Query {
    let sql = match dialect {
        Dialect::Postgres => {
            "SELECT date, member_casual, city, n_trips::int8 AS n_trips, percent_trips::float8 AS percent_trips
             FROM city_subscriber_trips_cleaned ORDER BY 2, 3, 1 DESC"
        }
        Dialect::Sqlite => "SELECT * FROM city_subscriber_trips_cleaned ORDER BY 2, 3, 1 DESC",
    };
    Query::new("city_subscriber_trips_cleaned", sql)
}

pub fn city_start_hours(dialect: Dialect) -> Query {
    let sql = match dialect {
        Dialect::Postgres => {
            "SELECT start_hour::int8 AS start_hour, city, n_trips::int8 AS n_trips
             FROM city_start_hours ORDER BY 2, 1"
        }
        Dialect::Sqlite => "SELECT * FROM city_start_hours ORDER BY 2, 1",
    };
    Query::new("city_start_hours", sql)
}

pub fn city_day_of_week(dialect: Dialect) -> Query {
    let sql = match dialect {
        Dialect::Postgres => {
            "SELECT day_of_week::int8 AS day_of_week, city, n_trips::int8 AS n_trips
             FROM city_day_of_week ORDER BY 2, 1"
        }
        Dialect::Sqlite => "SELECT * FROM city_day_of_week ORDER BY 2, 1",
    };
    Query::new("city_day_of_week", sql)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Param;

    const QUOTED: &str = "O'Hare & Mannheim";

    #[test]
    fn quoted_names_are_bound_not_interpolated() {
        for dialect in [Dialect::Postgres, Dialect::Sqlite] {
            for query in [
                station_location(dialect, QUOTED),
                end_stations(dialect, QUOTED),
            ] {
                assert!(
                    !query.sql.contains("O'Hare"),
                    "{} must not splice the name into SQL",
                    query.name
                );
                assert_eq!(query.params, vec![Param::Text(QUOTED.to_string())]);
            }
        }
    }

    #[test]
    fn sql_text_does_not_depend_on_value() {
        let a = end_stations(Dialect::Postgres, "Central Park");
        let b = end_stations(Dialect::Postgres, QUOTED);
        assert_eq!(a.sql, b.sql);
    }

    #[test]
    fn placeholders_match_dialect() {
        assert!(station_location(Dialect::Postgres, "x").sql.contains("= $1"));
        assert!(station_location(Dialect::Sqlite, "x").sql.contains("= ?1"));
        let overview = city_station_trips(Dialect::Sqlite, City::NewYorkCity);
        assert!(overview.sql.contains("city = ?1"));
        assert_eq!(overview.params, vec![Param::Text("New York City".into())]);
    }

    #[test]
    fn end_stations_limited_to_top_25() {
        for dialect in [Dialect::Postgres, Dialect::Sqlite] {
            assert!(end_stations(dialect, "x").sql.contains("LIMIT 25"));
        }
        assert!(end_stations(Dialect::Postgres, "x").sql.contains("PERCENTILE_CONT(0.5)"));
    }

    #[test]
    fn reference_order_is_explicit_on_both_backends() {
        for dialect in [Dialect::Postgres, Dialect::Sqlite] {
            assert!(top_station_by_city(dialect)
                .sql
                .ends_with("ORDER BY city, n_trips DESC, station_name"));
        }
    }

    #[test]
    fn postgres_chart_queries_cast_numeric_columns() {
        let rides = city_rides(Dialect::Postgres);
        assert!(rides.sql.contains("n_trips::int8"));
        let shares = city_subscriber_trips(Dialect::Postgres);
        assert!(shares.sql.contains("percent_trips::float8"));
        assert!(city_start_hours(Dialect::Postgres).sql.contains("start_hour::int8"));
        assert!(city_day_of_week(Dialect::Postgres).sql.contains("day_of_week::int8"));
        for query in [
            city_rides(Dialect::Sqlite),
            city_subscriber_trips(Dialect::Sqlite),
            city_start_hours(Dialect::Sqlite),
            city_day_of_week(Dialect::Sqlite),
        ] {
            assert!(!query.sql.contains("::"), "{} uses a Postgres cast", query.name);
        }
    }
}
