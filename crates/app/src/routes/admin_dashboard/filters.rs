use chrono::NaiveDate;
use dioxus::prelude::*;
use shared_types::{DateWindow, SortOption, SORT_OPTIONS};
use shared_ui::components::{Alert, AlertVariant, DateField, FormSelect, SearchBar};
use shared_ui::Date;

use crate::format_helpers::{picker_to_naive, DateFormat};

/// What the two date pickers currently describe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowPick {
    /// At least one end is empty; no date filtering.
    Unset,
    Valid(DateWindow),
    /// End before start; shown as a hint, not applied.
    Reversed,
}

impl WindowPick {
    pub fn resolve(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        match (start, end) {
            (Some(start), Some(end)) => match DateWindow::new(start, end) {
                Some(window) => WindowPick::Valid(window),
                None => WindowPick::Reversed,
            },
            _ => WindowPick::Unset,
        }
    }

    pub fn window(&self) -> Option<DateWindow> {
        match self {
            WindowPick::Valid(window) => Some(*window),
            WindowPick::Unset | WindowPick::Reversed => None,
        }
    }
}

/// Text shown under the filters for the current date pick.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowHint {
    /// Checked against reservations made in this session.
    Checked(String),
    /// No reservation times are known; only current availability applies.
    AvailabilityOnly(String),
    Reversed(String),
}

pub fn window_hint(
    pick: WindowPick,
    known_bookings: usize,
    date_format: &DateFormat,
) -> Option<WindowHint> {
    match pick {
        WindowPick::Unset => None,
        WindowPick::Valid(w) if known_bookings == 0 => Some(WindowHint::AvailabilityOnly(format!(
            "No reservation times are recorded yet, so {} to {} shows only spots available now.",
            date_format.date(w.start),
            date_format.date(w.end)
        ))),
        WindowPick::Valid(w) => Some(WindowHint::Checked(format!(
            "Showing spots free from {} to {} ({} known reservation{})",
            date_format.date(w.start),
            date_format.date(w.end),
            known_bookings,
            if known_bookings == 1 { "" } else { "s" }
        ))),
        WindowPick::Reversed => Some(WindowHint::Reversed(
            "End date must be on or after the start date.".to_string(),
        )),
    }
}

/// Location, date range and sort controls above the admin table.
#[component]
pub fn SpotFilters(
    location: Signal<String>,
    start_date: Signal<Option<Date>>,
    end_date: Signal<Option<Date>>,
    sort: Signal<SortOption>,
    facets: Memo<Vec<String>>,
    window: Memo<WindowPick>,
    known_bookings: Memo<usize>,
) -> Element {
    let mut location = location;
    let mut start_date = start_date;
    let mut end_date = end_date;
    let mut sort = sort;
    let date_format = use_context::<DateFormat>();

    let hint = window_hint(window(), known_bookings(), &date_format);

    rsx! {
        SearchBar {
            FormSelect {
                id: "location-filter",
                label: "Filter by Location",
                value: location.read().clone(),
                onchange: move |evt: Event<FormData>| location.set(evt.value()),
                option { value: "", "All" }
                for street in facets() {
                    option { key: "{street}", value: "{street}", "{street}" }
                }
            }
            DateField {
                label: "Start Date",
                value: start_date(),
                on_change: move |date: Option<Date>| start_date.set(date),
            }
            DateField {
                label: "End Date",
                value: end_date(),
                on_change: move |date: Option<Date>| end_date.set(date),
            }
            FormSelect {
                id: "sort-option",
                label: "Sort By",
                value: sort().as_str().to_string(),
                onchange: move |evt: Event<FormData>| sort.set(SortOption::from_key(&evt.value())),
                for choice in SORT_OPTIONS.iter().copied() {
                    option { value: choice.as_str(), {choice.display_name()} }
                }
            }
        }
        match hint {
            Some(WindowHint::Checked(text)) => rsx! {
                p { class: "filter-hint", role: "status", "{text}" }
            },
            Some(WindowHint::AvailabilityOnly(text)) => rsx! {
                Alert {
                    variant: AlertVariant::Info,
                    title: "Date range uses current availability",
                    class: "filter-notice",
                    span { "{text}" }
                }
            },
            Some(WindowHint::Reversed(text)) => rsx! {
                p { class: "filter-hint error", role: "alert", "{text}" }
            },
            None => rsx! {},
        }
    }
}

/// Picker dates converted for [`WindowPick::resolve`].
pub fn picks_to_window(start: Option<Date>, end: Option<Date>) -> WindowPick {
    WindowPick::resolve(
        start.and_then(picker_to_naive),
        end.and_then(picker_to_naive),
    )
}
