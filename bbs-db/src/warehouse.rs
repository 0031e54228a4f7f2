use crate::error::{Result, WarehouseError};
use crate::query::{Dialect, Query};
use crate::redshift::RedshiftWarehouse;
use crate::sqlite::SqliteWarehouse;
use crate::Database;
use bbs_core::config::WarehouseSettings;
use bbs_core::Frame;
use std::time::Instant;

/// The configured warehouse backend.
#[derive(Clone)]
pub enum Warehouse {
    Redshift(RedshiftWarehouse),
    Sqlite(SqliteWarehouse),
}

impl Warehouse {
    pub fn from_settings(settings: &WarehouseSettings) -> Self {
        match settings {
            WarehouseSettings::Redshift(r) => Warehouse::Redshift(RedshiftWarehouse::new(r.clone())),
            WarehouseSettings::Sqlite { path } => Warehouse::Sqlite(SqliteWarehouse::file(path.clone())),
        }
    }

    /// Backend over an already-loaded database, used by tests and fixtures.
    pub fn in_memory(db: Database) -> Self {
        Warehouse::Sqlite(SqliteWarehouse::shared(db))
    }

    pub fn dialect(&self) -> Dialect {
        match self {
            Warehouse::Redshift(_) => Dialect::Postgres,
            Warehouse::Sqlite(_) => Dialect::Sqlite,
        }
    }

    /// Execute `query` and return every row. Failures are not retried.
    pub async fn fetch(&self, query: &Query) -> Result<Frame> {
        let started = Instant::now();
        log::info!("[BBS Debug] warehouse: running '{}' with {} params", query.name, query.params.len());
        let result = match self {
            Warehouse::Redshift(w) => w.fetch(query).await,
            Warehouse::Sqlite(w) => {
                let (w, q) = (w.clone(), query.clone());
                match tokio::task::spawn_blocking(move || w.fetch(&q)).await {
                    Ok(result) => result,
                    Err(e) => Err(WarehouseError::from(e)),
                }
            }
        };
        match &result {
            Ok(frame) => log::info!(
                "[BBS Debug] warehouse: '{}' returned {} rows in {:?}",
                query.name,
                frame.len(),
                started.elapsed()
            ),
            Err(e) => log::error!("[BBS Debug] warehouse: '{}' failed: {}", query.name, e),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use std::path::PathBuf;

    #[test]
    fn dialect_follows_backend() {
        let sqlite = Warehouse::from_settings(&WarehouseSettings::Sqlite {
            path: PathBuf::from("bikes.sqlite"),
        });
        assert_eq!(sqlite.dialect(), Dialect::Sqlite);

        let redshift = Warehouse::from_settings(&WarehouseSettings::Redshift(
            bbs_core::config::RedshiftSettings {
                host: "h".into(),
                port: 5439,
                database: "dev".into(),
                user: "u".into(),
                password: "p".into(),
            },
        ));
        assert_eq!(redshift.dialect(), Dialect::Postgres);
    }

    #[tokio::test]
    async fn in_memory_fetch() {
        let db = Database::new().unwrap();
        db.load_stations("station_id,station_name,longitude,latitude,city\nS1,Kendall T,-71.08,42.36,Boston\n")
            .unwrap();
        let wh = Warehouse::in_memory(db);
        let frame = wh
            .fetch(&catalog::station_location(wh.dialect(), "Kendall T"))
            .await
            .unwrap();
        assert_eq!(frame.columns, vec!["longitude", "latitude"]);
        assert_eq!(frame.len(), 1);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn sqlite_fetch_leaves_runtime_free() {
        let db = Database::new().unwrap();
        db.load_stations("station_id,station_name,longitude,latitude,city\nS1,Kendall T,-71.08,42.36,Boston\n")
            .unwrap();
        let wh = Warehouse::in_memory(db.clone());

        // Hold the connection so the query has to wait on it. A fetch run on
        // the runtime thread would deadlock here.
        let guard = db.lock().unwrap();
        let query = catalog::station_location(wh.dialect(), "Kendall T");
        let pending = tokio::spawn(async move { wh.fetch(&query).await });
        tokio::task::yield_now().await;
        assert!(!pending.is_finished());
        drop(guard);

        let frame = pending.await.unwrap().unwrap();
        assert_eq!(frame.len(), 1);
    }

    #[test]
    fn join_failure_maps_to_task_error() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let err = rt.block_on(async {
            let join = tokio::task::spawn_blocking(|| -> () { panic!("boom") }).await;
            WarehouseError::from(join.unwrap_err())
        });
        assert!(matches!(err, WarehouseError::Task(_)));
    }
}
