//! Placeholder for a drilldown with nothing to draw.

use bbs_core::api::EmptyReason;
use dioxus::prelude::*;

pub fn empty_message(station: Option<&str>, reason: EmptyReason) -> String {
    match (reason, station) {
        (EmptyReason::NoReferenceStation, _) => "No station has recorded trips in this city yet.".to_string(),
        (EmptyReason::UnknownStation, Some(name)) => format!("No location on record for \"{}\".", name),
        (EmptyReason::UnknownStation, None) => "No location on record for that station.".to_string(),
        (EmptyReason::NoTrips, Some(name)) => format!("No trips start at {}.", name),
        (EmptyReason::NoTrips, None) => "No trips start at that station.".to_string(),
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct EmptyNoticeProps {
    #[props(default)]
    pub station: Option<String>,
    pub reason: EmptyReason,
}

#[component]
pub fn EmptyNotice(props: EmptyNoticeProps) -> Element {
    let message = empty_message(props.station.as_deref(), props.reason);
    rsx! {
        div {
            style: "padding: 40px; text-align: center; color: #888; border: 1px dashed #555; border-radius: 4px;",
            "{message}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_station() {
        assert_eq!(
            empty_message(Some("Kendall T"), EmptyReason::NoTrips),
            "No trips start at Kendall T."
        );
        assert!(empty_message(None, EmptyReason::NoReferenceStation).contains("city"));
    }
}
