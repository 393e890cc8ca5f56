use dioxus::prelude::*;

/// Small coloured dot shown next to list items: green when available,
/// red otherwise.
#[component]
pub fn StatusDot(available: bool) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            class: "status-dot",
            role: "img",
            aria_label: if available { "Available" } else { "Occupied" },
            "data-available": if available { "true" } else { "false" },
        }
    }
}
