//! Resolves the focal station from the page inputs.

use crate::error::{DashError, Result};
use crate::snapshot::ReferenceSnapshot;
use bbs_core::events::{ClickData, SelectionInputs, Trigger};
use bbs_core::Error;
use bbs_data::label::parse_station_label;

/// Pick the single authoritative station for this event.
///
/// A map click names the station it hit; anything else falls back to the
/// city's first reference station. `Ok(None)` means the city has none.
pub fn resolve(
    inputs: &SelectionInputs,
    trigger: Trigger,
    snapshot: &ReferenceSnapshot,
) -> Result<Option<String>> {
    let station = match trigger {
        Trigger::GlobalMap => Some(station_from_click(inputs.global_click.as_ref(), trigger)?),
        Trigger::DetailMap => Some(station_from_click(inputs.detail_click.as_ref(), trigger)?),
        Trigger::Initial | Trigger::CitySelect => {
            snapshot.default_station(inputs.city).map(str::to_string)
        }
    };
    log::info!(
        "[BBS Debug] selection: trigger={} city={} station={:?}",
        trigger.component_id(),
        inputs.city,
        station
    );
    Ok(station)
}

/// Station named by the first clicked point.
///
/// `customdata` wins when present; otherwise the hover label is parsed.
pub fn station_from_click(click: Option<&ClickData>, trigger: Trigger) -> Result<String> {
    let missing = || DashError::Selection(Error::MissingClickPoint(trigger.component_id()));
    let point = click.and_then(ClickData::first_point).ok_or_else(missing)?;

    if let Some(key) = point.customdata.as_deref().filter(|k| !k.is_empty()) {
        return Ok(key.to_string());
    }
    let text = point.text.as_deref().ok_or_else(missing)?;
    parse_station_label(text)
        .map(str::to_string)
        .map_err(DashError::Selection)
}
