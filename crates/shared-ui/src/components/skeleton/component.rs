use dioxus::prelude::*;

/// Loading placeholder with animated pulse.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
        }
    }
}

/// A column of `count` skeleton rows shown while a list loads.
#[component]
pub fn SkeletonList(#[props(default = 3)] count: usize) -> Element {
    rsx! {
        div { class: "skeleton-list", aria_busy: "true",
            for i in 0..count {
                Skeleton { key: "{i}" }
            }
        }
    }
}
