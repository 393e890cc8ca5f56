use dioxus::prelude::*;

/// Text input with an optional label and autocomplete suggestions.
///
/// When `suggestions` is non-empty a `datalist` is rendered and linked to the
/// input through `list_id`.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] suggestions: Vec<String>,
    #[props(default = "input-suggestions".to_string())] list_id: String,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let has_suggestions = !suggestions.is_empty();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", "{label}" }
            }
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                list: if has_suggestions { Some(list_id.clone()) } else { None },
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if has_suggestions {
                datalist { id: "{list_id}",
                    for suggestion in suggestions.iter() {
                        option { key: "{suggestion}", value: "{suggestion}" }
                    }
                }
            }
        }
    }
}
