use dioxus::prelude::*;
use shared_types::{ParkingSpot, ReservationFlow};
use shared_ui::components::{Button, ButtonVariant, StatusDot};

use crate::format_helpers::format_hourly_price;

#[component]
pub fn SpotList(
    spots: Memo<Vec<ParkingSpot>>,
    selected_id: Signal<Option<i64>>,
    flow: Signal<ReservationFlow>,
) -> Element {
    if spots.read().is_empty() {
        return rsx! {
            p { class: "spot-list-empty", "No parking spots match your search." }
        };
    }

    rsx! {
        ul { class: "spot-list",
            for spot in spots() {
                SpotListItem {
                    key: "{spot.id}",
                    selected: selected_id() == Some(spot.id),
                    spot: spot,
                    selected_id: selected_id,
                    flow: flow,
                }
            }
        }
    }
}

/// One row: location, price, status dot and the "Reserve" button.
///
/// Clicking anywhere on the row selects the spot; the button click bubbles
/// up, so reserving also selects.
#[component]
fn SpotListItem(
    spot: ParkingSpot,
    selected: bool,
    selected_id: Signal<Option<i64>>,
    flow: Signal<ReservationFlow>,
) -> Element {
    let mut selected_id = selected_id;
    let mut flow = flow;

    let price = format_hourly_price(spot.price_per_hour);
    let (can_reserve, pending) = {
        let current = flow.read();
        let pending = current.is_submitting() && current.spot().map(|s| s.id) == Some(spot.id);
        (current.can_reserve(), pending)
    };
    let id = spot.id;
    let available = spot.is_available;
    let location = spot.location.clone();

    rsx! {
        li {
            class: if selected { "spot-list-item selected" } else { "spot-list-item" },
            onclick: move |_| selected_id.set(Some(id)),
            div { class: "spot-list-text",
                span { class: "spot-list-location", "{location}" }
                span { class: "spot-list-price", "{price}" }
            }
            div { class: "spot-list-actions",
                StatusDot { available: available }
                if available {
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: !can_reserve,
                        loading: pending,
                        onclick: move |_| {
                            flow.write().open(spot.clone());
                        },
                        "Reserve"
                    }
                }
            }
        }
    }
}
