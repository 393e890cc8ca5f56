use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use server::health::HealthResponse;

use crate::common;

#[tokio::test]
async fn test_health_returns_ok_status_code() {
    let app = common::health_app();

    let (status, _) = common::get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_health_reports_backend_and_version() {
    server::health::record_start_time();
    let app = common::health_app();

    let (_, body) = common::get_json(&app, "/health").await;
    let health: HealthResponse =
        serde_json::from_value(body).expect("health body should deserialize");

    assert_eq!(health.version, "0.1.0");
    if health.backend == "unconfigured" {
        assert_eq!(health.status, "degraded");
    } else {
        assert_eq!(health.status, "ok");
        assert!(!health.backend.ends_with('/'));
    }
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = common::health_app();

    let (status, _) = common::get_json(&app, "/healthz").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
