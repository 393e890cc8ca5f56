use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

use crate::common::{self, MockBackend, Reply};

#[tokio::test]
async fn test_list_spots_decodes_backend_collection() {
    let mock = MockBackend::start().await;
    mock.reply_to_spots(Reply::json(StatusCode::OK, common::scenario_spots()))
        .await;

    let spots = mock.client().list_spots().await.expect("listing should succeed");

    let ids: Vec<i64> = spots.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(spots[0].location, "100 Block of Forbes Ave");
    assert!(spots[0].is_available);
    assert!(!spots[1].is_available);
    assert_eq!(spots[1].price_per_hour, 3.0);
}

#[tokio::test]
async fn test_list_spots_empty_collection() {
    let mock = MockBackend::start().await;

    let spots = mock.client().list_spots().await.expect("listing should succeed");

    assert!(spots.is_empty());
}

#[tokio::test]
async fn test_list_spots_server_error_passes_message_through() {
    let mock = MockBackend::start().await;
    mock.reply_to_spots(Reply::json(
        StatusCode::INTERNAL_SERVER_ERROR,
        serde_json::json!({ "error": "Database unavailable" }),
    ))
    .await;

    let err = mock.client().list_spots().await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Upstream);
    assert_eq!(err.message, "Database unavailable");
}

#[tokio::test]
async fn test_list_spots_not_found_without_body() {
    let mock = MockBackend::start().await;
    mock.reply_to_spots(Reply::raw(StatusCode::NOT_FOUND, "")).await;

    let err = mock.client().list_spots().await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.message, shared_types::UNKNOWN_ERROR);
}

#[tokio::test]
async fn test_list_spots_malformed_body_is_upstream_error() {
    let mock = MockBackend::start().await;
    mock.reply_to_spots(Reply::raw(StatusCode::OK, "{\"not\": \"a list\"}"))
        .await;

    let err = mock.client().list_spots().await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Upstream);
}

#[tokio::test]
async fn test_list_spots_unreachable_backend_is_network_error() {
    let base_url = common::unreachable_base_url().await;
    let client = server::backend::SpotsBackend::new(base_url, std::time::Duration::from_secs(2))
        .expect("client should build");

    let err = client.list_spots().await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Network);
}

#[tokio::test]
async fn test_trailing_slash_in_base_url_is_normalized() {
    let mock = MockBackend::start().await;
    mock.reply_to_spots(Reply::json(StatusCode::OK, common::scenario_spots()))
        .await;
    let client = server::backend::SpotsBackend::new(
        format!("{}/", mock.base_url),
        std::time::Duration::from_secs(5),
    )
    .expect("client should build");

    assert_eq!(client.base_url(), mock.base_url);
    assert_eq!(client.list_spots().await.map(|s| s.len()).ok(), Some(2));
}
