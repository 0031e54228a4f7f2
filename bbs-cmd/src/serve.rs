//! HTTP API and page hosting.
//!
//! | Route                          | Body                          |
//! |--------------------------------|-------------------------------|
//! | `GET /api/health`              | `{"status":"ok"}`             |
//! | `GET /api/cities`              | city selector options         |
//! | `GET /api/station-map?city=..` | initial `EventResponse`       |
//! | `POST /api/event`              | `EventRequest` → `EventResponse` |
//! | `GET /api/charts`              | the four static charts        |
//!
//! Page bundles come from the static directory: `station-map/` is served at
//! `/` and `visualizations/` under `/Visualizations`.

use crate::render::start_dashboard;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use bbs_core::api::{ChartsResponse, ErrorBody, EventRequest, EventResponse};
use bbs_core::City;
use bbs_dash::{DashError, Dashboard};
use log::{error, info, warn};
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tower_http::services::ServeDir;

/// An error turned into an HTTP status plus a JSON body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl From<DashError> for ApiError {
    fn from(err: DashError) -> Self {
        let status = match &err {
            DashError::Selection(_) => StatusCode::BAD_REQUEST,
            DashError::Warehouse(_) => StatusCode::BAD_GATEWAY,
            DashError::Data(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<bbs_core::Error> for ApiError {
    fn from(err: bbs_core::Error) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!("{}: {}", self.status, self.message);
        } else {
            warn!("{}: {}", self.status, self.message);
        }
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}

/// Subdirectory of the static dir holding the station map build.
pub const STATION_MAP_DIR: &str = "station-map";
/// Subdirectory of the static dir holding the visualizations build.
pub const VISUALIZATIONS_DIR: &str = "visualizations";
pub const VISUALIZATIONS_PATH: &str = "/Visualizations";

pub fn router(dashboard: Dashboard, static_dir: &Path) -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/cities", get(cities_handler))
        .route("/api/station-map", get(station_map_handler))
        .route("/api/event", post(event_handler))
        .route("/api/charts", get(charts_handler))
        .nest_service(VISUALIZATIONS_PATH, ServeDir::new(static_dir.join(VISUALIZATIONS_DIR)))
        .fallback_service(ServeDir::new(static_dir.join(STATION_MAP_DIR)))
        .with_state(dashboard)
}

/// GET `/api/health`
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// GET `/api/cities` - selector options in display order.
pub async fn cities_handler() -> Json<Vec<City>> {
    Json(City::ALL.to_vec())
}

#[derive(Debug, Default, Deserialize)]
pub struct StationMapParams {
    pub city: Option<String>,
}

/// GET `/api/station-map?city=<name>` - both maps for the first page load.
///
/// A missing `city` means the default (Boston); an unknown one is `400`.
pub async fn station_map_handler(
    State(dashboard): State<Dashboard>,
    Query(params): Query<StationMapParams>,
) -> Result<Json<EventResponse>, ApiError> {
    let city = match params.city.as_deref() {
        Some(name) => name.parse::<City>()?,
        None => City::default(),
    };
    info!("Station map request for {}", city);
    Ok(Json(dashboard.initial(city).await?))
}

/// POST `/api/event` - fold one UI event into the page inputs.
pub async fn event_handler(
    State(dashboard): State<Dashboard>,
    Json(request): Json<EventRequest>,
) -> Result<Json<EventResponse>, ApiError> {
    info!("Event {:?} for {}", request.event, request.inputs.city);
    Ok(Json(dashboard.handle(request.inputs, request.event).await?))
}

/// GET `/api/charts` - static charts from the start-up snapshot.
pub async fn charts_handler(State(dashboard): State<Dashboard>) -> Json<ChartsResponse> {
    Json(dashboard.snapshot().charts().clone())
}

pub async fn run_serve(bind: SocketAddr, static_dir: PathBuf, sqlite: Option<PathBuf>) -> anyhow::Result<()> {
    let dashboard = start_dashboard(sqlite).await?;
    let app = router(dashboard, &static_dir);

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", bind, e))?;
    info!("Serving dashboard on http://{} (static files from {})", bind, static_dir.display());
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bbs_core::api::Drilldown;
    use bbs_core::events::{ClickData, DashboardEvent, SelectionInputs, Trigger};
    use bbs_db::{Database, Warehouse, WarehouseError};

    const STATIONS_CSV: &str = "\
station_id,station_name,longitude,latitude,city
B1,South Station,-71.0552,42.3523,Boston
B2,Kendall T,-71.0862,42.3625,Boston
";

    const TRIPS_CSV: &str = "\
ride_id,started_at,start_station_id,end_station_id,member_casual,duration
t1,2023-05-01 08:00:00,B1,B2,member,10
t2,2023-05-01 09:00:00,B1,B2,casual,14
t3,2023-05-03 07:45:00,B2,B1,member,11
";

    async fn dashboard() -> Dashboard {
        let db = Database::new().unwrap();
        db.load_stations(STATIONS_CSV).unwrap();
        db.load_trips(TRIPS_CSV).unwrap();
        Dashboard::start(Warehouse::in_memory(db), String::new())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn health_is_ok() {
        let Json(body) = health_handler().await;
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn cities_in_selector_order() {
        let Json(cities) = cities_handler().await;
        assert_eq!(cities.len(), 5);
        assert_eq!(cities[0], City::Boston);
        assert_eq!(serde_json::to_value(&cities).unwrap()[2], "New York City");
    }

    #[tokio::test]
    async fn station_map_defaults_to_boston() {
        let Json(resp) = station_map_handler(State(dashboard().await), Query(StationMapParams::default()))
            .await
            .unwrap();
        assert_eq!(resp.inputs.city, City::Boston);
        assert_eq!(resp.trigger, Trigger::Initial);
        assert!(resp.overview.is_some());
        assert_eq!(resp.drilldown.station(), Some("South Station"));
    }

    #[tokio::test]
    async fn unknown_city_is_bad_request() {
        let err = station_map_handler(
            State(dashboard().await),
            Query(StationMapParams {
                city: Some("Atlantis".into()),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn event_round_trip() {
        let request = EventRequest {
            inputs: SelectionInputs::for_city(City::Boston),
            event: DashboardEvent::GlobalMapClicked {
                click: ClickData::from_label("Kendall T (1 trips)"),
            },
        };
        let Json(resp) = event_handler(State(dashboard().await), Json(request))
            .await
            .unwrap();
        assert!(resp.overview.is_none());
        assert!(matches!(resp.drilldown, Drilldown::Rendered { .. }));
    }

    #[tokio::test]
    async fn malformed_click_is_bad_request() {
        let request = EventRequest {
            inputs: SelectionInputs::for_city(City::Boston),
            event: DashboardEvent::DetailMapClicked {
                click: ClickData::default(),
            },
        };
        let err = event_handler(State(dashboard().await), Json(request))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("graph-specific"));
    }

    #[tokio::test]
    async fn charts_come_from_snapshot() {
        let Json(charts) = charts_handler(State(dashboard().await)).await;
        assert_eq!(charts.charts.len(), 4);
    }

    #[tokio::test]
    async fn pages_are_served_at_their_paths() {
        let static_dir = std::env::temp_dir().join(format!("bbs-serve-{}", std::process::id()));
        for (dir, body) in [(STATION_MAP_DIR, "station map page"), (VISUALIZATIONS_DIR, "charts page")] {
            std::fs::create_dir_all(static_dir.join(dir)).unwrap();
            std::fs::write(static_dir.join(dir).join("index.html"), body).unwrap();
        }

        let app = router(dashboard().await, &static_dir);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await });

        let get = |path: &str| reqwest::get(format!("http://{}{}", addr, path));
        assert_eq!(get("/").await.unwrap().text().await.unwrap(), "station map page");
        assert_eq!(
            get("/Visualizations/").await.unwrap().text().await.unwrap(),
            "charts page"
        );
        let health: Value = get("/api/health").await.unwrap().json().await.unwrap();
        assert_eq!(health, json!({ "status": "ok" }));

        let _ = std::fs::remove_dir_all(static_dir);
    }

    #[test]
    fn warehouse_failure_is_bad_gateway() {
        let err: ApiError = DashError::Warehouse(WarehouseError::Connect("refused".into())).into();
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
