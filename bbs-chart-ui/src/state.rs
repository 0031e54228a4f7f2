//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use bbs_core::api::{ChartsResponse, Drilldown, EventResponse, Overview};
use bbs_core::events::SelectionInputs;
use dioxus::prelude::*;

/// Shared application state for the bike share pages.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether a request is in flight
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Current city plus the last click on each map
    pub inputs: Signal<SelectionInputs>,
    /// City overview; only replaced when the city changes
    pub overview: Signal<Option<Overview>>,
    /// Station drilldown (map and table)
    pub drilldown: Signal<Option<Drilldown>>,
    /// Static charts for the visualizations page
    pub charts: Signal<ChartsResponse>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            inputs: Signal::new(SelectionInputs::default()),
            overview: Signal::new(None),
            drilldown: Signal::new(None),
            charts: Signal::new(ChartsResponse::default()),
        }
    }

    /// Fold a server response into the signals.
    ///
    /// An absent overview leaves the current one in place.
    pub fn apply(&mut self, response: EventResponse) {
        log::info!(
            "[BBS Debug] apply response: trigger={:?} overview={} drilldown_empty={}",
            response.trigger,
            response.overview.is_some(),
            response.drilldown.is_empty()
        );
        self.inputs.set(response.inputs);
        if let Some(overview) = response.overview {
            self.overview.set(Some(overview));
        }
        self.drilldown.set(Some(response.drilldown));
        self.error_msg.set(None);
    }
}

/// Admits one dashboard request at a time.
///
/// Events that arrive while a request is in flight are refused, so a click on
/// a map that is about to be replaced never races the request replacing it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestGate {
    issued: u64,
    in_flight: Option<u64>,
}

impl RequestGate {
    /// Ticket for a new request, or `None` while another is pending.
    pub fn begin(&mut self) -> Option<u64> {
        if self.in_flight.is_some() {
            return None;
        }
        self.issued += 1;
        self.in_flight = Some(self.issued);
        Some(self.issued)
    }

    /// Close `ticket`. Returns whether it was the pending request.
    pub fn finish(&mut self, ticket: u64) -> bool {
        if self.in_flight == Some(ticket) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
