mod filters;
mod spot_table;

use dioxus::prelude::*;
use shared_types::{SortOption, SpotFilter};
use shared_ui::components::{
    Alert, AlertVariant, Button, ButtonVariant, Card, CardTitle, Skeleton, SkeletonList, StatCard, StatTone,
};
use shared_ui::Date;

use crate::components::{PopupStatus, SpotMap};
use crate::spots::{use_map_config, use_spots};
use filters::{picks_to_window, SpotFilters};
use spot_table::SpotTable;

/// Spot statistics, filterable table and overview map.
#[component]
pub fn AdminDashboard() -> Element {
    let mut spots = use_spots();
    let store = spots.store;
    let map_config = use_map_config();

    let location = use_signal(String::new);
    let start_date = use_signal(|| None::<Date>);
    let end_date = use_signal(|| None::<Date>);
    let sort = use_signal(SortOption::default);
    let selected_id = use_signal(|| None::<i64>);

    let window = use_memo(move || picks_to_window(start_date(), end_date()));
    let filter = use_memo(move || SpotFilter {
        location: location(),
        window: window().window(),
        sort: sort(),
    });
    let rows = use_memo(move || {
        let store = store.read();
        filter.read().apply(store.spots(), store.bookings())
    });
    let stats = use_memo(move || store.read().stats());
    let facets = use_memo(move || store.read().facets());
    let known_bookings = use_memo(move || store.read().bookings().len());
    let selected = use_memo(move || {
        let id = selected_id()?;
        rows.read().iter().find(|s| s.id == id).cloned()
    });

    let error = spots.error.read().clone();
    let loading = *spots.loading.read();
    let counts = stats();
    let shown = rows.read().len();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin_dashboard.css") }

        div { class: "dashboard admin-dashboard",
            if let Some(message) = error {
                Alert {
                    variant: AlertVariant::Destructive,
                    title: "Could not load parking spots",
                    on_dismiss: move |_| spots.dismiss_error(),
                    span { "{message}" }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| spots.retry(),
                        "Retry"
                    }
                }
            }

            div { class: "stat-row",
                StatCard { label: "Total Spots", value: counts.total.to_string() }
                StatCard {
                    label: "Total Available Spots",
                    value: counts.available.to_string(),
                    tone: StatTone::Positive,
                }
                StatCard {
                    label: "Total Reserved Spots",
                    value: counts.reserved.to_string(),
                    tone: StatTone::Negative,
                }
            }

            div { class: "dashboard-body",
                Card { class: "map-card",
                    match map_config() {
                        Some(config) => rsx! {
                            SpotMap {
                                map_id: "admin-map",
                                spots: rows,
                                selected: selected,
                                config: config,
                                status: PopupStatus::Reservation,
                            }
                        },
                        None => rsx! {
                            Skeleton { class: "map-skeleton" }
                        },
                    }
                }

                Card { class: "table-card",
                    CardTitle { "Parking Spots ({shown} shown)" }
                    SpotFilters {
                        location: location,
                        start_date: start_date,
                        end_date: end_date,
                        sort: sort,
                        facets: facets,
                        window: window,
                        known_bookings: known_bookings,
                    }
                    if loading {
                        SkeletonList { count: 8 }
                    } else {
                        SpotTable { rows: rows, selected_id: selected_id }
                    }
                }
            }
        }
    }
}
