use dioxus::prelude::*;

/// Rounded, shadowed panel used for the map, list, and statistics blocks.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-title", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        h3 {
            ..merged,
            {children}
        }
    }
}

/// Tone of the figure shown in a [`StatCard`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Positive,
    Negative,
}

impl StatTone {
    fn class(&self) -> &'static str {
        match self {
            StatTone::Neutral => "neutral",
            StatTone::Positive => "positive",
            StatTone::Negative => "negative",
        }
    }
}

/// Card with a caption and one large figure.
#[component]
pub fn StatCard(label: String, value: String, #[props(default)] tone: StatTone) -> Element {
    rsx! {
        Card { class: "stat-card",
            span { class: "stat-card-label", "{label}" }
            span { class: "stat-card-value", "data-tone": tone.class(), "{value}" }
        }
    }
}
