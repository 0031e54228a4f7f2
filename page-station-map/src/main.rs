//! Station Map
//!
//! Two linked maps and a table. The left map shows every station of the
//! selected city sized by trips started there; the right map shows where
//! trips from one focal station end, and the table lists those end stations.
//!
//! Data flow:
//! 1. On mount the page asks `/api/station-map` for the default city.
//! 2. Picking a city or clicking a marker on either map posts a
//!    `DashboardEvent` plus the current inputs to `/api/event`. Events that
//!    arrive while a request is pending are dropped.
//! 3. The response carries the new inputs, the drilldown and (on a city
//!    change only) a new overview; effects hand the figures to Plotly.

use bbs_chart_ui::api::ApiClient;
use bbs_chart_ui::components::{
    ChartContainer, ChartHeader, CitySelector, DataTable, EmptyNotice, ErrorDisplay, LoadingSpinner, NavBar, Page,
};
use bbs_chart_ui::js_bridge;
use bbs_chart_ui::state::{AppState, RequestGate};
use bbs_core::api::{Drilldown, EventRequest, Overview};
use bbs_core::events::{ClickData, DashboardEvent};
use bbs_core::City;
use dioxus::prelude::*;

const GLOBAL_MAP_ID: &str = "graph-all";
const DETAIL_MAP_ID: &str = "graph-specific";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("station-map-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let client = use_hook(ApiClient::from_window);
    let mut gate = use_signal(RequestGate::default);

    let dispatch = {
        let client = client.clone();
        move |event: DashboardEvent| {
            let Some(ticket) = gate.write().begin() else {
                log::info!("[BBS Debug] ignoring {:?} while a request is pending", event);
                return;
            };
            let client = client.clone();
            let request = EventRequest {
                inputs: state.inputs.read().clone(),
                event,
            };
            log::info!("[BBS Debug] dispatch #{} {:?}", ticket, request.event);
            spawn(async move {
                let result = client.send_event(&request).await;
                gate.write().finish(ticket);
                match result {
                    Ok(response) => state.apply(response),
                    Err(e) => {
                        log::error!("[BBS Debug] event failed: {}", e);
                        state.error_msg.set(Some(e.to_string()));
                    }
                }
            });
        }
    };

    // Initial load
    {
        let client = client.clone();
        use_effect(move || {
            js_bridge::init_plotly();
            let client = client.clone();
            spawn(async move {
                match client.station_map(City::default()).await {
                    Ok(response) => state.apply(response),
                    Err(e) => {
                        log::error!("[BBS Debug] initial load failed: {}", e);
                        state.error_msg.set(Some(format!("Failed to load station map: {}", e)));
                    }
                }
                state.loading.set(false);
            });
        });
    }

    // Map clicks
    {
        let dispatch = dispatch.clone();
        use_future(move || {
            let mut dispatch = dispatch.clone();
            async move {
                let mut events = js_bridge::click_events(GLOBAL_MAP_ID);
                while let Some(point) = js_bridge::next_click(&mut events).await {
                    dispatch(DashboardEvent::GlobalMapClicked {
                        click: ClickData { points: vec![point] },
                    });
                }
            }
        });
    }
    {
        let dispatch = dispatch.clone();
        use_future(move || {
            let mut dispatch = dispatch.clone();
            async move {
                let mut events = js_bridge::click_events(DETAIL_MAP_ID);
                while let Some(point) = js_bridge::next_click(&mut events).await {
                    dispatch(DashboardEvent::DetailMapClicked {
                        click: ClickData { points: vec![point] },
                    });
                }
            }
        });
    }

    // Overview figure
    use_effect(move || {
        let overview = state.overview.read();
        match overview.as_ref().and_then(Overview::figure) {
            Some(figure) => js_bridge::render_figure(GLOBAL_MAP_ID, figure),
            None => js_bridge::purge_figure(GLOBAL_MAP_ID),
        }
    });

    // Drilldown figure
    use_effect(move || {
        let drilldown = state.drilldown.read();
        match drilldown.as_ref() {
            Some(Drilldown::Rendered { figure, .. }) => js_bridge::render_figure(DETAIL_MAP_ID, figure),
            _ => js_bridge::purge_figure(DETAIL_MAP_ID),
        }
    });

    let mut dispatch = dispatch;
    let on_city = move |city: City| dispatch(DashboardEvent::CitySelected { city });

    let busy = gate.read().is_busy();
    let city = state.inputs.read().city;
    let drilldown = state.drilldown.read().clone();

    rsx! {
        div {
            style: "padding: 16px; background: #111; color: #eee; min-height: 100vh; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            NavBar { active: Page::StationMap }

            ChartHeader {
                title: "Bike Share Stations".to_string(),
                subtitle: "Click a station on the left map to see where its trips end.".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay {
                    message: err,
                    on_dismiss: move |_| state.error_msg.set(None),
                }
            }

            if (state.loading)() {
                LoadingSpinner {}
            } else {
                CitySelector {
                    selected: city,
                    on_select: on_city,
                    disabled: busy,
                }

                div {
                    style: "display: flex; gap: 12px;",
                    ChartContainer {
                        id: GLOBAL_MAP_ID.to_string(),
                        busy,
                        width: "50%".to_string(),
                    }
                    div {
                        style: "width: 50%;",
                        if let Some(Drilldown::Empty { station, reason }) = drilldown.clone() {
                            EmptyNotice { station, reason }
                        }
                        ChartContainer {
                            id: DETAIL_MAP_ID.to_string(),
                            busy,
                        }
                    }
                }

                if let Some(Drilldown::Rendered { table, .. }) = drilldown {
                    DataTable { table }
                }
            }
        }
    }
}
