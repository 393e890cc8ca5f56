use axum::http::StatusCode;
use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, ReservationRequest, UNKNOWN_ERROR};

use crate::common::{self, MockBackend, Reply};

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 14, 0, 0).unwrap()
}

fn one_hour(spot_id: i64, price: f64) -> ReservationRequest {
    ReservationRequest::starting_at(1, spot_id, price, start(), 1)
}

#[tokio::test]
async fn test_reserve_success_returns_backend_message() {
    let mock = MockBackend::start().await;

    let response = mock
        .client()
        .reserve(&one_hour(1, 2.0))
        .await
        .expect("reservation should succeed");

    assert_eq!(response.message, "Reservation successful");
}

#[tokio::test]
async fn test_reserve_sends_backend_wire_shape() {
    let mock = MockBackend::start().await;

    mock.client()
        .reserve(&one_hour(7, 2.5))
        .await
        .expect("reservation should succeed");

    let requests = mock.reserve_requests().await;
    assert_eq!(requests.len(), 1);
    let body = &requests[0];
    assert_eq!(body["user"], 1);
    assert_eq!(body["parking_spot"], 7);
    assert_eq!(body["total_price"], 2.5);

    let start_time = DateTime::parse_from_rfc3339(body["start_time"].as_str().unwrap())
        .expect("start_time should be RFC 3339");
    let end_time = DateTime::parse_from_rfc3339(body["end_time"].as_str().unwrap())
        .expect("end_time should be RFC 3339");
    assert_eq!(start_time.with_timezone(&Utc), start());
    assert_eq!((end_time - start_time).num_minutes(), 60);
}

#[tokio::test]
async fn test_reserve_conflict_passes_error_verbatim() {
    let mock = MockBackend::start().await;
    mock.reply_to_reserve(Reply::json(
        StatusCode::CONFLICT,
        serde_json::json!({ "error": "Spot is already reserved" }),
    ))
    .await;

    let err = mock.client().reserve(&one_hour(2, 3.0)).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Conflict);
    assert_eq!(err.message, "Spot is already reserved");
}

#[tokio::test]
async fn test_reserve_bad_request_passes_error_verbatim() {
    let mock = MockBackend::start().await;
    mock.reply_to_reserve(Reply::json(
        StatusCode::BAD_REQUEST,
        serde_json::json!({ "error": "Invalid user" }),
    ))
    .await;

    let err = mock.client().reserve(&one_hour(2, 3.0)).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(err.message, "Invalid user");
}

#[tokio::test]
async fn test_reserve_error_without_message_is_unknown() {
    let mock = MockBackend::start().await;
    mock.reply_to_reserve(Reply::raw(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>"))
        .await;

    let err = mock.client().reserve(&one_hour(2, 3.0)).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Upstream);
    assert_eq!(err.message, UNKNOWN_ERROR);
}

#[tokio::test]
async fn test_reserve_success_without_message_is_upstream_error() {
    let mock = MockBackend::start().await;
    mock.reply_to_reserve(Reply::raw(StatusCode::OK, "{}")).await;

    let err = mock.client().reserve(&one_hour(1, 2.0)).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Upstream);
}

#[tokio::test]
async fn test_reserve_invalid_request_never_reaches_backend() {
    let mock = MockBackend::start().await;
    let request = ReservationRequest::starting_at(0, 1, 2.0, start(), 1);

    let err = mock.client().reserve(&request).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(err.message, "A signed-in user is required");
    assert!(mock.reserve_requests().await.is_empty());
}

#[tokio::test]
async fn test_reserve_negative_price_rejected() {
    let mock = MockBackend::start().await;

    let err = mock.client().reserve(&one_hour(1, -1.0)).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(err.message, "Price must be non-negative");
}

#[tokio::test]
async fn test_reserve_unreachable_backend_is_network_error() {
    let base_url = common::unreachable_base_url().await;
    let client = server::backend::SpotsBackend::new(base_url, std::time::Duration::from_secs(2))
        .expect("client should build");

    let err = client.reserve(&one_hour(1, 2.0)).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Network);
}
