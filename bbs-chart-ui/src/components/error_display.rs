//! Error banner.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Offer a dismiss button that calls this
    #[props(default)]
    pub on_dismiss: Option<EventHandler<()>>,
}

/// Shows a failed request without tearing down the rest of the page.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 16px; margin: 8px 0; background: #3b1f22; color: #ff8a80; border-radius: 4px; border: 1px solid #c62828;",
            span {
                strong { "Error: " }
                "{props.message}"
            }
            if let Some(handler) = props.on_dismiss {
                button {
                    style: "background: none; border: none; color: inherit; cursor: pointer; font-size: 16px;",
                    onclick: move |_| handler.call(()),
                    "×"
                }
            }
        }
    }
}
