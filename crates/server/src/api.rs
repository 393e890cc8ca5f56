use dioxus::prelude::*;
use shared_types::{MapConfig, ParkingSpot, ReservationReceipt};

// ── Parking Server Functions ───────────────────────────

/// Map widget settings. No backend round trip.
#[server]
pub async fn get_map_config() -> Result<MapConfig, ServerFnError> {
    Ok(crate::config::app_config().map.clone())
}

/// Full spot collection from the parking backend.
#[server]
pub async fn list_spots() -> Result<Vec<ParkingSpot>, ServerFnError> {
    use crate::backend::backend;
    use crate::error_convert::AppErrorExt;

    let spots = backend()
        .map_err(AppErrorExt::into_server_fn_error)?
        .list_spots()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to fetch parking spots");
            e.into_server_fn_error()
        })?;
    Ok(spots)
}

/// Reserve a spot for the configured acting user, starting now.
#[server]
pub async fn reserve_spot(
    spot_id: i64,
    price_per_hour: f64,
) -> Result<ReservationReceipt, ServerFnError> {
    use crate::backend::backend;
    use crate::error_convert::AppErrorExt;
    use shared_types::ReservationRequest;

    let config = crate::config::app_config();
    let client = backend().map_err(AppErrorExt::into_server_fn_error)?;

    let request = ReservationRequest::starting_at(
        config.reservation.user_id,
        spot_id,
        price_per_hour,
        chrono::Utc::now(),
        config.reservation.hours,
    );

    let response = client.reserve(&request).await.map_err(|e| {
        tracing::error!(spot_id, error = %e, "Reservation failed");
        e.into_server_fn_error()
    })?;

    Ok(ReservationReceipt {
        message: response.message,
        booking: request.booking(),
    })
}
