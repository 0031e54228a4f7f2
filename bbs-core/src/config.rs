//! Environment-driven settings.
//!
//! Read once at start-up. The lookup is injectable so tests do not touch the
//! process environment.

use crate::error::{Error, Result};
use std::fmt;
use std::path::PathBuf;

pub const ENV_REDSHIFT_HOST: &str = "redshift_host";
pub const ENV_REDSHIFT_PORT: &str = "redshift_port";
pub const ENV_REDSHIFT_DATABASE: &str = "redshift_database";
pub const ENV_REDSHIFT_USER: &str = "redshift_user";
pub const ENV_REDSHIFT_PASSWORD: &str = "redshift_password";
pub const ENV_SQLITE_PATH: &str = "bikeshare_sqlite";
pub const ENV_MAPBOX_TOKEN: &str = "mapboxtoken";

pub const DEFAULT_REDSHIFT_PORT: u16 = 5439;
pub const DEFAULT_REDSHIFT_DATABASE: &str = "dev";

/// Connection parameters for the Redshift warehouse.
#[derive(Clone, PartialEq)]
pub struct RedshiftSettings {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl fmt::Debug for RedshiftSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedshiftSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Which backend answers queries.
#[derive(Debug, Clone, PartialEq)]
pub enum WarehouseSettings {
    Redshift(RedshiftSettings),
    Sqlite { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub warehouse: WarehouseSettings,
    /// Mapbox access token injected into every map figure.
    pub mapbox_token: String,
}

impl Settings {
    /// Read settings from the process environment.
    ///
    /// `sqlite_override` (the `--sqlite` flag) wins over every environment
    /// variable.
    pub fn from_env(sqlite_override: Option<PathBuf>) -> Result<Self> {
        Self::from_lookup(sqlite_override, |key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(sqlite_override: Option<PathBuf>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let warehouse = match sqlite_override.or_else(|| get(ENV_SQLITE_PATH).map(PathBuf::from)) {
            Some(path) => WarehouseSettings::Sqlite { path },
            None => {
                let require = |key: &str| {
                    get(key).ok_or_else(|| Error::Config(format!("{} is not set", key)))
                };
                let port = match get(ENV_REDSHIFT_PORT) {
                    Some(p) => p.trim().parse::<u16>().map_err(|_| {
                        Error::Config(format!("{} is not a port number: {}", ENV_REDSHIFT_PORT, p))
                    })?,
                    None => DEFAULT_REDSHIFT_PORT,
                };
                WarehouseSettings::Redshift(RedshiftSettings {
                    host: require(ENV_REDSHIFT_HOST)?,
                    port,
                    database: get(ENV_REDSHIFT_DATABASE)
                        .unwrap_or_else(|| DEFAULT_REDSHIFT_DATABASE.to_string()),
                    user: require(ENV_REDSHIFT_USER)?,
                    password: require(ENV_REDSHIFT_PASSWORD)?,
                })
            }
        };

        let mapbox_token = get(ENV_MAPBOX_TOKEN).unwrap_or_default();
        if mapbox_token.is_empty() {
            log::warn!("{} is not set; map backdrops will not render", ENV_MAPBOX_TOKEN);
        }

        Ok(Self {
            warehouse,
            mapbox_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn redshift_with_defaults() {
        let settings = Settings::from_lookup(
            None,
            lookup(&[
                ("redshift_host", "example.redshift.amazonaws.com"),
                ("redshift_user", "analyst"),
                ("redshift_password", "hunter2"),
                ("mapboxtoken", "pk.test"),
            ]),
        )
        .unwrap();
        match settings.warehouse {
            WarehouseSettings::Redshift(ref r) => {
                assert_eq!(r.port, 5439);
                assert_eq!(r.database, "dev");
                assert_eq!(r.user, "analyst");
            }
            ref other => panic!("expected redshift, got {:?}", other),
        }
        assert_eq!(settings.mapbox_token, "pk.test");
    }

    #[test]
    fn missing_redshift_host_is_config_error() {
        let err = Settings::from_lookup(None, lookup(&[("redshift_user", "u")])).unwrap_err();
        assert_eq!(err, Error::Config("redshift_host is not set".into()));
    }

    #[test]
    fn bad_port_is_config_error() {
        let err = Settings::from_lookup(
            None,
            lookup(&[
                ("redshift_host", "h"),
                ("redshift_port", "abc"),
                ("redshift_user", "u"),
                ("redshift_password", "p"),
            ]),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn sqlite_env_selects_embedded_backend() {
        let settings =
            Settings::from_lookup(None, lookup(&[("bikeshare_sqlite", "/tmp/bikes.db")])).unwrap();
        assert_eq!(
            settings.warehouse,
            WarehouseSettings::Sqlite {
                path: PathBuf::from("/tmp/bikes.db")
            }
        );
        assert!(settings.mapbox_token.is_empty());
    }

    #[test]
    fn override_beats_environment() {
        let settings = Settings::from_lookup(
            Some(PathBuf::from("local.db")),
            lookup(&[("bikeshare_sqlite", "/tmp/bikes.db"), ("redshift_host", "h")]),
        )
        .unwrap();
        assert_eq!(
            settings.warehouse,
            WarehouseSettings::Sqlite {
                path: PathBuf::from("local.db")
            }
        );
    }

    #[test]
    fn debug_redacts_password() {
        let r = RedshiftSettings {
            host: "h".into(),
            port: 5439,
            database: "dev".into(),
            user: "u".into(),
            password: "secret".into(),
        };
        let shown = format!("{:?}", r);
        assert!(!shown.contains("secret"));
    }
}
