mod reserve_dialog;
mod spot_list;

use dioxus::prelude::*;
use shared_types::{search_spots, search_suggestions, ReservationFlow};
use shared_ui::components::{
    Alert, AlertVariant, Button, ButtonVariant, Card, CardTitle, Input, SearchBar, Skeleton, SkeletonList,
};

use crate::components::SpotMap;
use crate::spots::{use_map_config, use_spots};
use reserve_dialog::ReserveDialog;
use spot_list::SpotList;

/// Map and list of spots with search and one-click reservation.
#[component]
pub fn UserDashboard() -> Element {
    let mut spots = use_spots();
    let store = spots.store;
    let map_config = use_map_config();

    let mut query = use_signal(String::new);
    let mut selected_id = use_signal(|| None::<i64>);
    let flow = use_signal(ReservationFlow::default);

    // First spot becomes the selection once the listing arrives.
    use_effect(move || {
        let first = store.read().first_id();
        if selected_id.peek().is_none() && first.is_some() {
            selected_id.set(first);
        }
    });

    let visible = use_memo(move || search_spots(store.read().spots(), &query.read()));
    let suggestions = use_memo(move || search_suggestions(store.read().spots()));
    let selected = use_memo(move || {
        let id = selected_id()?;
        store.read().get(id).cloned()
    });

    let error = spots.error.read().clone();
    let loading = *spots.loading.read();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./user_dashboard.css") }

        div { class: "dashboard user-dashboard",
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

            div { class: "dashboard-body",
                Card { class: "map-card",
                    match map_config() {
                        Some(config) => rsx! {
                            SpotMap {
                                map_id: "user-map",
                                spots: visible,
                                selected: selected,
                                config: config,
                            }
                        },
                        None => rsx! {
                            Skeleton { class: "map-skeleton" }
                        },
                    }
                }

                Card { class: "list-card",
                    if loading {
                        SkeletonList { count: 6 }
                    } else {
                        SearchBar { icon: true,
                            Input {
                                value: query.read().clone(),
                                placeholder: "Search Parking Spots...",
                                suggestions: suggestions(),
                                list_id: "street-suggestions",
                                on_input: move |evt: FormEvent| query.set(evt.value()),
                            }
                        }
                        CardTitle { class: "list-heading", "Available Parking Spots" }
                        SpotList {
                            spots: visible,
                            selected_id: selected_id,
                            flow: flow,
                        }
                    }
                }
            }

            ReserveDialog { flow: flow, store: store }
        }
    }
}
