use dioxus::prelude::*;

/// Visual variant for alert banners.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AlertVariant {
    #[default]
    Info,
    Destructive,
}

impl AlertVariant {
    fn class(&self) -> &'static str {
        match self {
            AlertVariant::Info => "info",
            AlertVariant::Destructive => "destructive",
        }
    }
}

/// Inline banner for page-level errors and notices.
///
/// Renders a dismiss button when `on_dismiss` is set.
#[component]
pub fn Alert(
    #[props(default)] variant: AlertVariant,
    #[props(default)] title: String,
    #[props(default)] on_dismiss: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "alert", None, false),
        Attribute::new("data-style", variant.class(), None, false),
        Attribute::new("role", "alert", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            div { class: "alert-body",
                if !title.is_empty() {
                    strong { class: "alert-title", "{title}" }
                }
                div { class: "alert-message", {children} }
            }
            if let Some(handler) = on_dismiss {
                button {
                    class: "alert-dismiss",
                    aria_label: "Dismiss",
                    onclick: move |evt| handler.call(evt),
                    "×"
                }
            }
        }
    }
}
