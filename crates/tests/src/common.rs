use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde_json::Value;
use server::backend::SpotsBackend;
use tokio::sync::Mutex;
use tower::ServiceExt;

/// Canned response for one mock backend route.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

impl Reply {
    pub fn json(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    pub fn raw(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    fn into_response(self) -> axum::response::Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            self.body,
        )
            .into_response()
    }
}

#[derive(Debug, Default)]
struct MockState {
    spots: Option<Reply>,
    reserve: Option<Reply>,
    reserve_requests: Vec<Value>,
}

type Shared = Arc<Mutex<MockState>>;

/// In-process stand-in for the parking backend, bound to an ephemeral port.
///
/// Unconfigured routes answer `200 []` for the listing and
/// `200 {"message": "Reservation successful"}` for reservations.
#[derive(Debug, Clone)]
pub struct MockBackend {
    pub base_url: String,
    state: Shared,
}

impl MockBackend {
    pub async fn start() -> Self {
        let state: Shared = Arc::new(Mutex::new(MockState::default()));
        let app = Router::new()
            .route("/api/spots/", get(spots_handler))
            .route("/api/reserve/", post(reserve_handler))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("Mock backend has no address");
        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Mock backend stopped");
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub async fn reply_to_spots(&self, reply: Reply) {
        self.state.lock().await.spots = Some(reply);
    }

    pub async fn reply_to_reserve(&self, reply: Reply) {
        self.state.lock().await.reserve = Some(reply);
    }

    /// JSON bodies received on `POST /api/reserve/`, oldest first.
    pub async fn reserve_requests(&self) -> Vec<Value> {
        self.state.lock().await.reserve_requests.clone()
    }

    pub fn client(&self) -> SpotsBackend {
        SpotsBackend::new(self.base_url.clone(), Duration::from_secs(5))
            .expect("Failed to build backend client")
    }
}

async fn spots_handler(State(state): State<Shared>) -> axum::response::Response {
    let reply = state
        .lock()
        .await
        .spots
        .clone()
        .unwrap_or_else(|| Reply::raw(StatusCode::OK, "[]"));
    reply.into_response()
}

async fn reserve_handler(State(state): State<Shared>, body: String) -> axum::response::Response {
    let mut guard = state.lock().await;
    guard
        .reserve_requests
        .push(serde_json::from_str(&body).unwrap_or(Value::Null));
    guard
        .reserve
        .clone()
        .unwrap_or_else(|| {
            Reply::json(
                StatusCode::OK,
                serde_json::json!({ "message": "Reservation successful" }),
            )
        })
        .into_response()
}

/// A base URL nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Probe listener has no address");
    drop(listener);
    format!("http://{addr}")
}

/// Spot JSON in the backend's wire shape.
pub fn spot_json(id: i64, location: &str, is_available: bool, price: f64) -> Value {
    serde_json::json!({
        "id": id,
        "location": location,
        "latitude": 40.428 + id as f64 * 0.001,
        "longitude": -79.922,
        "price_per_hour": price,
        "is_available": is_available,
    })
}

/// The two-spot collection used across the dashboard scenarios.
pub fn scenario_spots() -> Value {
    serde_json::json!([
        spot_json(1, "100 Block of Forbes Ave", true, 2.0),
        spot_json(2, "200 Block of Murray Ave", false, 3.0),
    ])
}

/// Router exposing only the health route, as mounted by the app.
pub fn health_app() -> Router {
    Router::new().route("/health", get(server::health::health_check))
}

/// GET a route through the router and parse the JSON response.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);
    (status, value)
}
