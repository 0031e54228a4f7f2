//! Cities served by the dashboard.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the bike share systems present in the warehouse.
///
/// The serialized form is the display name (`"New York City"`), which is also
/// the value stored in the `city` column of the `stations` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum City {
    #[default]
    #[serde(rename = "Boston")]
    Boston,
    #[serde(rename = "Chicago")]
    Chicago,
    #[serde(rename = "New York City")]
    NewYorkCity,
    #[serde(rename = "San Francisco")]
    SanFrancisco,
    #[serde(rename = "Washington DC")]
    WashingtonDc,
}

impl City {
    /// Selector order.
    pub const ALL: [City; 5] = [
        City::Boston,
        City::Chicago,
        City::NewYorkCity,
        City::SanFrancisco,
        City::WashingtonDc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            City::Boston => "Boston",
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::SanFrancisco => "San Francisco",
            City::WashingtonDc => "Washington DC",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for City {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        City::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownCity(s.to_string()))
    }
}
