use dioxus::prelude::ServerFnError;
use shared_types::{AppError, BackendErrorBody, UNKNOWN_ERROR};

/// Convert a reqwest::Error into an AppError.
pub fn reqwest_to_app_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::network("The parking service timed out")
    } else if err.is_connect() || err.is_request() {
        AppError::network(format!("Could not reach the parking service: {err}"))
    } else if err.is_decode() {
        AppError::upstream(format!("Unexpected response from the parking service: {err}"))
    } else if let Some(status) = err.status() {
        AppError::from_status(status.as_u16(), err.to_string())
    } else {
        AppError::internal(err.to_string())
    }
}

/// Build an AppError from a non-success backend response body.
///
/// The backend's `error` field is passed through verbatim; anything else
/// becomes [`UNKNOWN_ERROR`].
pub fn backend_error(status: u16, body: &str) -> AppError {
    let message = serde_json::from_str::<BackendErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| UNKNOWN_ERROR.to_string());
    AppError::from_status(status, message)
}

/// Convert an AppError into a ServerFnError by serializing as JSON.
pub fn app_error_to_server_fn_error(err: AppError) -> ServerFnError {
    let json = serde_json::to_string(&err).unwrap_or_else(|_| err.message.clone());
    ServerFnError::new(json)
}

/// Extension trait providing `.into_app_error()` on reqwest::Error.
pub trait ReqwestErrorExt {
    fn into_app_error(self) -> AppError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_app_error(self) -> AppError {
        reqwest_to_app_error(self)
    }
}

/// Extension trait providing `.into_server_fn_error()` on AppError.
pub trait AppErrorExt {
    fn into_server_fn_error(self) -> ServerFnError;
}

impl AppErrorExt for AppError {
    fn into_server_fn_error(self) -> ServerFnError {
        app_error_to_server_fn_error(self)
    }
}

/// Trait for validating request DTOs before they are sent upstream.
pub trait ValidateRequest {
    fn validate_request(&self) -> Result<(), AppError>;
}

impl<T: validator::Validate> ValidateRequest for T {
    fn validate_request(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}
