//! Plot container with a busy overlay.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id Plotly draws into; also the click source id
    pub id: String,
    /// Dim the plot while a newer figure is on its way
    #[props(default = false)]
    pub busy: bool,
    /// Matches the figure layout height
    #[props(default = 650)]
    pub height: u32,
    /// CSS width, e.g. "50%"
    #[props(default = "100%".to_string())]
    pub width: String,
}

/// A div for a Plotly figure.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let outer = format!(
        "position: relative; width: {}; min-height: {}px;",
        props.width, props.height
    );
    let opacity = if props.busy { "0.5" } else { "1" };

    rsx! {
        div {
            style: "{outer}",
            if props.busy {
                div {
                    style: "position: absolute; top: 8px; right: 12px; color: #aaa; z-index: 2;",
                    "Updating..."
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%; height: {props.height}px; opacity: {opacity};",
            }
        }
    }
}
