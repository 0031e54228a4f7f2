//! Dashboard banner with links between the two pages.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    StationMap,
    Visualizations,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::StationMap, Page::Visualizations];

    pub fn title(&self) -> &'static str {
        match self {
            Page::StationMap => "Station Map",
            Page::Visualizations => "Visualizations",
        }
    }

    /// Path the server hosts this page's bundle under.
    pub fn href(&self) -> &'static str {
        match self {
            Page::StationMap => "/",
            Page::Visualizations => "/Visualizations",
        }
    }
}

fn pill_style(active: bool) -> &'static str {
    if active {
        "padding: 6px 14px; border-radius: 999px; text-decoration: none; background: #0d6efd; color: #fff;"
    } else {
        "padding: 6px 14px; border-radius: 999px; text-decoration: none; color: #0d6efd;"
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavBarProps {
    /// Page currently shown; its pill is highlighted
    pub active: Page,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 12px;",
            div {
                style: "font-size: 50px; text-align: center;",
                "Bike Share Dashboard"
            }
            nav {
                style: "display: flex; gap: 8px; padding: 6px; background: #f8f9fa; border-radius: 4px; width: fit-content;",
                for page in Page::ALL {
                    a {
                        href: page.href(),
                        style: pill_style(page == props.active),
                        "{page.title()}"
                    }
                }
            }
            hr {}
        }
    }
}
