use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaMagnifyingGlass;
use dioxus_free_icons::Icon;

/// Search bar row holding the query input and an optional icon.
///
/// `icon` prefixes the row with a magnifying glass.
#[component]
pub fn SearchBar(#[props(default = false)] icon: bool, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: if icon { "search-bar rounded" } else { "search-bar" },
            if icon {
                span { class: "search-bar-icon",
                    Icon { width: 16, height: 16, icon: FaMagnifyingGlass }
                }
            }
            {children}
        }
    }
}
