//! One-shot rendering to stdout.

use bbs_core::config::Settings;
use bbs_core::City;
use bbs_dash::Dashboard;
use bbs_db::Warehouse;
use log::info;
use std::path::PathBuf;

/// Read settings, connect the warehouse and load the reference snapshot.
pub async fn start_dashboard(sqlite: Option<PathBuf>) -> anyhow::Result<Dashboard> {
    let settings = Settings::from_env(sqlite)?;
    info!("Using warehouse {:?}", settings.warehouse);
    let warehouse = Warehouse::from_settings(&settings.warehouse);
    Ok(Dashboard::start(warehouse, settings.mapbox_token).await?)
}

pub async fn run_render(city: City, station: Option<&str>, sqlite: Option<PathBuf>) -> anyhow::Result<()> {
    let dashboard = start_dashboard(sqlite).await?;
    let json = match station {
        Some(station) => serde_json::to_string_pretty(&dashboard.drilldown(station).await?)?,
        None => serde_json::to_string_pretty(&dashboard.initial(city).await?)?,
    };
    println!("{}", json);
    Ok(())
}

pub async fn run_charts(sqlite: Option<PathBuf>) -> anyhow::Result<()> {
    let dashboard = start_dashboard(sqlite).await?;
    println!("{}", serde_json::to_string_pretty(dashboard.snapshot().charts())?);
    Ok(())
}
