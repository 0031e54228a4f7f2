//! Ridership Visualizations
//!
//! Four cross-city charts built once when the server starts: trips per
//! month, member/casual share, trips by start hour and trips by weekday.
//! The page fetches them from `/api/charts` and draws each into the
//! container whose id the server assigned.

use bbs_chart_ui::api::ApiClient;
use bbs_chart_ui::components::{ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, NavBar, Page};
use bbs_chart_ui::js_bridge;
use bbs_chart_ui::state::AppState;
use dioxus::prelude::*;

/// Section headings, keyed by chart id.
const SECTIONS: [(&str, &str); 4] = [
    ("n-trips-graph", "How many trips are taken each month?"),
    ("n-trips-graph-subscribers", "Who is riding: members or casual riders?"),
    ("start-hour", "When do trips start?"),
    ("days", "Which days are busiest?"),
];

fn section_title(id: &str) -> &'static str {
    SECTIONS
        .iter()
        .find(|(chart, _)| *chart == id)
        .map(|(_, title)| *title)
        .unwrap_or("")
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("visualizations-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    use_effect(move || {
        js_bridge::init_plotly();
        spawn(async move {
            match ApiClient::from_window().charts().await {
                Ok(charts) => {
                    log::info!("[BBS Debug] received {} charts", charts.charts.len());
                    state.charts.set(charts);
                }
                Err(e) => {
                    log::error!("[BBS Debug] charts request failed: {}", e);
                    state.error_msg.set(Some(format!("Failed to load charts: {}", e)));
                }
            }
            state.loading.set(false);
        });
    });

    // Draw once the containers exist
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        for chart in state.charts.read().charts.iter() {
            js_bridge::render_figure(&chart.id, &chart.figure);
        }
    });

    let ids: Vec<String> = state.charts.read().charts.iter().map(|c| c.id.clone()).collect();

    rsx! {
        div {
            style: "padding: 16px; background: #111; color: #eee; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            NavBar { active: Page::Visualizations }

            ChartHeader {
                title: "Bike Share Ridership".to_string(),
                subtitle: "Boston, Chicago, New York City, San Francisco and Washington, DC".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner { label: "Loading charts...".to_string() }
            } else {
                for id in ids {
                    div {
                        key: "{id}",
                        style: "margin-bottom: 24px;",
                        h3 { {section_title(&id)} }
                        ChartContainer { id: id.clone() }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_chart_has_a_heading() {
        for id in ["n-trips-graph", "n-trips-graph-subscribers", "start-hour", "days"] {
            assert!(!section_title(id).is_empty(), "{}", id);
        }
        assert_eq!(section_title("unknown"), "");
    }
}
