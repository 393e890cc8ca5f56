use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Instant;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the application start time. Call once during startup.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Configured parking backend, or `"unconfigured"`.
    pub backend: String,
    pub uptime_seconds: u64,
    pub version: String,
}

/// `GET /health`
pub async fn health_check() -> Json<HealthResponse> {
    let config = crate::config::app_config();
    let (status, backend) = if config.api.base_url.is_empty() {
        ("degraded", "unconfigured".to_string())
    } else {
        ("ok", config.api.base_url.clone())
    };

    let uptime = START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0);

    Json(HealthResponse {
        status: status.to_string(),
        backend,
        uptime_seconds: uptime,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
