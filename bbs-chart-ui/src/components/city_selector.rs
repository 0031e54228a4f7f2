//! Dropdown selector for choosing a city.

use bbs_core::City;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CitySelectorProps {
    pub selected: City,
    pub on_select: EventHandler<City>,
    #[props(default = false)]
    pub disabled: bool,
}

/// City dropdown. Fires `on_select` only for a different, known city.
#[component]
pub fn CitySelector(props: CitySelectorProps) -> Element {
    let selected = props.selected;
    let on_select = props.on_select;

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<City>() {
        Ok(city) if city != selected => on_select.call(city),
        Ok(_) => {}
        Err(e) => log::warn!("[BBS Debug] city selector: {}", e),
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "city-dropdown",
                style: "font-weight: bold; margin-right: 8px;",
                "City: "
            }
            select {
                id: "city-dropdown",
                disabled: props.disabled,
                onchange: on_change,
                for city in City::ALL {
                    option {
                        value: "{city}",
                        selected: city == selected,
                        "{city}"
                    }
                }
            }
        }
    }
}
