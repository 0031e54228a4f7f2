//! Command implementations for the bike share dashboard CLI.
//!
//! `serve` hosts the JSON API and the page bundles, `load` builds the
//! embedded SQLite warehouse from CSV extracts, and `render`/`charts` print
//! the payloads the pages would receive.

use bbs_core::City;
use clap::Subcommand;
use std::net::SocketAddr;
use std::path::PathBuf;

pub mod load;
pub mod render;
pub mod serve;

#[derive(Subcommand)]
pub enum Command {
    /// Serve the JSON API and the dashboard pages
    Serve {
        /// Address to bind the web server
        #[arg(short, long, default_value = "127.0.0.1:8050")]
        bind: SocketAddr,

        /// Directory with the built page bundles
        #[arg(long, default_value = "dist")]
        static_dir: PathBuf,

        /// Query this SQLite warehouse file instead of Redshift
        #[arg(long)]
        sqlite: Option<PathBuf>,
    },

    /// Build (or extend) a SQLite warehouse file from CSV extracts
    Load {
        /// SQLite database file to create or update
        #[arg(short, long)]
        db: PathBuf,

        /// Stations CSV: station_id,station_name,longitude,latitude,city
        #[arg(short, long)]
        stations_csv: PathBuf,

        /// Trips CSV: ride_id,started_at,start_station_id,end_station_id,member_casual,duration
        #[arg(short, long)]
        trips_csv: PathBuf,
    },

    /// Print the station map payload for a city (or one station) as JSON
    Render {
        /// City whose maps to render
        #[arg(short, long, default_value = "Boston")]
        city: City,

        /// Drill down into this station instead of the city's top station
        #[arg(long)]
        station: Option<String>,

        /// Query this SQLite warehouse file instead of Redshift
        #[arg(long)]
        sqlite: Option<PathBuf>,
    },

    /// Print the four static charts as JSON
    Charts {
        /// Query this SQLite warehouse file instead of Redshift
        #[arg(long)]
        sqlite: Option<PathBuf>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Serve {
            bind,
            static_dir,
            sqlite,
        } => serve::run_serve(bind, static_dir, sqlite).await,
        Command::Load {
            db,
            stations_csv,
            trips_csv,
        } => load::run_load(&db, &stations_csv, &trips_csv),
        Command::Render {
            city,
            station,
            sqlite,
        } => render::run_render(city, station.as_deref(), sqlite).await,
        Command::Charts { sqlite } => render::run_charts(sqlite).await,
    }
}
