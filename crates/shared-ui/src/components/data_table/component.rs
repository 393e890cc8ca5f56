use dioxus::prelude::*;

/// Scrollable table wrapper with co-located styles.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                {children}
            }
        }
    }
}

/// Table header section. Wraps `th` elements in a `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

#[component]
pub fn DataTableColumn(children: Element) -> Element {
    rsx! {
        th { {children} }
    }
}

/// Table row; clickable when `onclick` is set, highlighted when `selected`.
#[component]
pub fn DataTableRow(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(default = false)] selected: bool,
    children: Element,
) -> Element {
    let class = match (onclick.is_some(), selected) {
        (true, true) => "data-table-row clickable selected",
        (true, false) => "data-table-row clickable",
        (false, true) => "data-table-row selected",
        (false, false) => "data-table-row",
    };
    rsx! {
        tr {
            class: class,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

/// Table data cell. `tone` sets a `data-tone` attribute for status colouring.
#[component]
pub fn DataTableCell(#[props(default)] tone: String, children: Element) -> Element {
    rsx! {
        td {
            "data-tone": if tone.is_empty() { None } else { Some(tone.clone()) },
            {children}
        }
    }
}
