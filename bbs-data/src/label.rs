//! Composite hover labels.
//!
//! The label `"<name> (<count> trips)"` is what a user sees on hover and, for
//! click payloads without a structured key, the only place the station name
//! comes back from. Writer and parser live together so they stay in step.

use bbs_core::{Error, Result};

pub fn composite_label(name: &str, count: i64) -> String {
    format!("{} ({} trips)", name, count)
}

/// Recover the station name from a composite label.
///
/// The name is everything before the first `" ("` that is followed by an
/// ASCII digit. Labels without that marker are rejected.
pub fn parse_station_label(text: &str) -> Result<&str> {
    text.match_indices(" (")
        .find(|(idx, _)| {
            text.as_bytes()
                .get(idx + 2)
                .is_some_and(|b| b.is_ascii_digit())
        })
        .map(|(idx, _)| &text[..idx])
        .ok_or_else(|| Error::MalformedLabel(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_label() {
        assert_eq!(parse_station_label("Central Park (42 trips)").unwrap(), "Central Park");
    }

    #[test]
    fn round_trips_names() {
        for name in [
            "Central Park",
            "O'Hare Station",
            "MIT at Mass Ave / Amherst St",
            "Broadway (North)",
            "Clark St & Lake St",
            "",
        ] {
            assert_eq!(parse_station_label(&composite_label(name, 7)).unwrap(), name);
        }
    }

    #[test]
    fn parenthesis_without_digit_is_part_of_name() {
        assert_eq!(
            parse_station_label("Park (East) (3 trips)").unwrap(),
            "Park (East)"
        );
    }

    #[test]
    fn label_without_count_is_malformed() {
        let err = parse_station_label("Central Park").unwrap_err();
        assert_eq!(err, Error::MalformedLabel("Central Park".into()));
        assert!(parse_station_label("Central Park (trips)").is_err());
    }

    #[test]
    fn name_with_digit_parenthesis_truncates_at_first_marker() {
        assert_eq!(parse_station_label("Pier (5) Dock (9 trips)").unwrap(), "Pier");
    }
}
