use dioxus::prelude::*;
use dioxus_primitives::calendar::CalendarProps;
use dioxus_primitives::date_picker as prim;
use time::Date;

#[component]
pub fn DatePicker(mut props: prim::DatePickerProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "date-picker", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DatePicker { ..props }
    }
}

#[component]
pub fn DatePickerPopover(mut props: prim::DatePickerPopoverProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "date-picker-popover", None, false));

    rsx! {
        prim::DatePickerPopover { ..props }
    }
}

#[component]
pub fn DatePickerCalendar(mut props: prim::DatePickerCalendarProps<CalendarProps>) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "date-picker-calendar", None, false));

    rsx! {
        prim::DatePickerCalendar { ..props }
    }
}

#[component]
pub fn DatePickerInput(mut props: prim::DatePickerInputProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "date-picker-input", None, false));

    rsx! {
        prim::DatePickerInput { ..props }
    }
}

/// Labelled single-date picker with its popover calendar.
#[component]
pub fn DateField(
    label: String,
    value: Option<Date>,
    on_change: EventHandler<Option<Date>>,
) -> Element {
    rsx! {
        div { class: "date-field",
            span { class: "date-field-label", "{label}" }
            DatePicker {
                selected_date: value,
                on_value_change: move |val: Option<Date>| on_change.call(val),
                DatePickerInput {}
                DatePickerPopover {
                    DatePickerCalendar {}
                }
            }
        }
    }
}
