use dioxus::prelude::*;
use shared_types::{AppError, ReservationFlow, SpotStore};
use shared_ui::components::{
    Button, ButtonVariant, DialogActions, DialogContent, DialogDescription, DialogRoot,
    DialogTitle,
};
use shared_ui::{use_toast, ToastOptions};

use crate::format_helpers::{format_hourly_price, format_price, DateFormat};

/// Confirmation dialog driven by [`ReservationFlow`].
///
/// On success the store flips the spot to unavailable and keeps the booking;
/// on failure the dialog stays open with the backend's message.
#[component]
pub fn ReserveDialog(flow: Signal<ReservationFlow>, store: Signal<SpotStore>) -> Element {
    let mut flow = flow;
    let mut store = store;
    let toast = use_toast();
    let date_format = use_context::<DateFormat>();

    let current = flow.read().clone();
    let open = current.dialog_open();
    let submitting = current.is_submitting();
    let location = current
        .spot()
        .map(|s| s.location.clone())
        .unwrap_or_default();
    let price = current
        .spot()
        .map(|s| format_hourly_price(s.price_per_hour))
        .unwrap_or_default();
    let error = current.error().map(str::to_string);

    let handle_proceed = move |_| {
        let Some(spot) = flow.write().begin_submit() else {
            return;
        };
        spawn(async move {
            match server::api::reserve_spot(spot.id, spot.price_per_hour).await {
                Ok(receipt) => {
                    let booking = receipt.booking.clone();
                    store.write().apply_booking(receipt.booking);
                    flow.write().succeed();
                    toast.success(
                        format!(
                            "Reservation successful! {} until {} ({})",
                            spot.location,
                            date_format.datetime(booking.end_time),
                            format_price(booking.total_price)
                        ),
                        ToastOptions::new(),
                    );
                }
                Err(e) => {
                    let message = AppError::friendly_message(&e.to_string());
                    tracing::warn!(spot_id = spot.id, %message, "Reservation rejected");
                    flow.write().fail(message.clone());
                    toast.error(format!("Reservation failed: {message}"), ToastOptions::new());
                }
            }
        });
    };

    rsx! {
        DialogRoot {
            open: open,
            on_open_change: move |open: bool| {
                if !open {
                    flow.write().cancel();
                }
            },
            DialogContent {
                DialogTitle { "Confirm Reservation" }
                DialogDescription { "Proceed with reservation for {location}?" }
                p { class: "dialog-detail", "{price}" }
                if let Some(message) = error {
                    p { class: "dialog-error", role: "alert", "{message}" }
                }
                DialogActions {
                    Button {
                        variant: ButtonVariant::Secondary,
                        disabled: submitting,
                        onclick: move |_| {
                            flow.write().cancel();
                        },
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        loading: submitting,
                        onclick: handle_proceed,
                        "Proceed"
                    }
                }
            }
        }
    }
}
