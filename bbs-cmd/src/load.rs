//! Build the embedded SQLite warehouse from CSV extracts.

use bbs_db::Database;
use log::info;
use std::path::Path;

/// Load stations then trips into `db`, creating the file if needed.
///
/// Rows already present (same id) are replaced, so re-running with a newer
/// extract updates the warehouse in place.
pub fn run_load(db: &Path, stations_csv: &Path, trips_csv: &Path) -> anyhow::Result<()> {
    let stations = std::fs::read_to_string(stations_csv)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", stations_csv.display(), e))?;
    let trips = std::fs::read_to_string(trips_csv)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", trips_csv.display(), e))?;

    let database = Database::open(db)?;
    let n_stations = database.load_stations(&stations)?;
    let n_trips = database.load_trips(&trips)?;

    info!(
        "Loaded {} stations and {} trips into {}",
        n_stations,
        n_trips,
        db.display()
    );
    println!("{}: {} stations, {} trips", db.display(), n_stations, n_trips);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bbs_db::{catalog, Dialect, Warehouse};

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("bbs-cmd-{}-{}", std::process::id(), name))
    }

    #[tokio::test]
    async fn load_builds_queryable_file() {
        let db = temp_path("load.sqlite");
        let stations = temp_path("stations.csv");
        let trips = temp_path("trips.csv");
        let _ = std::fs::remove_file(&db);
        std::fs::write(
            &stations,
            "station_id,station_name,longitude,latitude,city\nB1,South Station,-71.05,42.35,Boston\n",
        )
        .unwrap();
        std::fs::write(
            &trips,
            "ride_id,started_at,start_station_id,end_station_id,member_casual,duration\nt1,2023-05-01 08:00:00,B1,B1,member,9\n",
        )
        .unwrap();

        run_load(&db, &stations, &trips).unwrap();

        let wh = Warehouse::from_settings(&bbs_core::config::WarehouseSettings::Sqlite {
            path: db.clone(),
        });
        let frame = wh
            .fetch(&catalog::top_station_by_city(Dialect::Sqlite))
            .await
            .unwrap();
        assert_eq!(frame.len(), 1);

        for p in [db, stations, trips] {
            let _ = std::fs::remove_file(p);
        }
    }

    #[tokio::test]
    async fn sample_fixtures_cover_every_city() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../fixtures");
        let db = temp_path("fixtures.sqlite");
        let _ = std::fs::remove_file(&db);

        run_load(&db, &root.join("stations.csv"), &root.join("trips.csv")).unwrap();

        let wh = Warehouse::from_settings(&bbs_core::config::WarehouseSettings::Sqlite {
            path: db.clone(),
        });
        let frame = wh
            .fetch(&catalog::top_station_by_city(Dialect::Sqlite))
            .await
            .unwrap();
        let cities: std::collections::BTreeSet<&str> =
            (0..frame.len()).map(|row| frame.str_at(row, 0).unwrap()).collect();
        assert_eq!(cities.len(), 5);
        let _ = std::fs::remove_file(db);
    }

    #[test]
    fn missing_csv_is_error() {
        let err = run_load(
            &temp_path("never.sqlite"),
            Path::new("/nonexistent/stations.csv"),
            Path::new("/nonexistent/trips.csv"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("stations.csv"));
    }
}
