use std::sync::OnceLock;
use std::time::Duration;

use shared_types::{ApiConfig, AppError, ParkingSpot, ReservationRequest, ReservationResponse};

use crate::error_convert::{backend_error, ReqwestErrorExt, ValidateRequest};

static BACKEND: OnceLock<SpotsBackend> = OnceLock::new();

/// HTTP client for the external parking backend.
#[derive(Debug, Clone)]
pub struct SpotsBackend {
    client: reqwest::Client,
    base_url: String,
}

impl SpotsBackend {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(AppError::config(
                "API_BASE_URL is not configured for the parking service",
            ));
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ReqwestErrorExt::into_app_error)?;
        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, AppError> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /api/spots/`
    #[tracing::instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn list_spots(&self) -> Result<Vec<ParkingSpot>, AppError> {
        let response = self
            .client
            .get(self.url("/api/spots/"))
            .send()
            .await
            .map_err(ReqwestErrorExt::into_app_error)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            let err = backend_error(status, &body);
            tracing::warn!(status, error = %err, "Spot listing rejected");
            return Err(err);
        }

        let spots: Vec<ParkingSpot> = response
            .json()
            .await
            .map_err(ReqwestErrorExt::into_app_error)?;
        tracing::info!(count = spots.len(), "Fetched parking spots");
        Ok(spots)
    }

    /// `POST /api/reserve/`
    #[tracing::instrument(skip(self, request), fields(spot_id = request.parking_spot))]
    pub async fn reserve(
        &self,
        request: &ReservationRequest,
    ) -> Result<ReservationResponse, AppError> {
        request.validate_request()?;

        let response = self
            .client
            .post(self.url("/api/reserve/"))
            .json(request)
            .send()
            .await
            .map_err(ReqwestErrorExt::into_app_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(ReqwestErrorExt::into_app_error)?;

        if !status.is_success() {
            let err = backend_error(status.as_u16(), &body);
            tracing::warn!(status = status.as_u16(), error = %err, "Reservation rejected");
            return Err(err);
        }

        let parsed: ReservationResponse = serde_json::from_str(&body).map_err(|e| {
            AppError::upstream(format!("Unexpected response from the parking service: {e}"))
        })?;
        tracing::info!(message = %parsed.message, "Reservation accepted");
        Ok(parsed)
    }
}

/// Process-wide backend client built from the loaded config.
pub fn backend() -> Result<&'static SpotsBackend, AppError> {
    if let Some(existing) = BACKEND.get() {
        return Ok(existing);
    }
    let built = SpotsBackend::from_config(&crate::config::app_config().api)?;
    Ok(BACKEND.get_or_init(|| built))
}
