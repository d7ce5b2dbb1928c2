//! Axum router for the bfhl HTTP transport.
//! Routes: `POST /bfhl` (operations), `GET /health` (liveness).

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{Map, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use bfhl_dispatch::Dispatcher;
use bfhl_types::ResponseEnvelope;

/// Error for a body over the size limit.
pub const BODY_TOO_LARGE: &str = "Request body too large";
/// Error for a body that is not JSON.
pub const INVALID_JSON: &str = "Invalid JSON body";
/// Error for a body that could not be read.
pub const UNREADABLE_BODY: &str = "Request body could not be read";

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// The request dispatcher.
    pub dispatcher: Arc<Dispatcher>,
    /// Largest accepted request body, in bytes.
    pub body_limit: usize,
}

/// Builds the axum `Router` with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.body_limit;
    Router::new()
        .route("/bfhl", post(handle_bfhl))
        .route("/health", get(handle_health))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.dispatcher.health())
}

async fn handle_bfhl(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let dispatcher = &state.dispatcher;

    let bytes = match body {
        Ok(b) => b,
        Err(rejection) => {
            let status = rejection.status();
            tracing::warn!(%status, "request body rejected");
            let message = if status == StatusCode::PAYLOAD_TOO_LARGE {
                BODY_TOO_LARGE
            } else {
                UNREADABLE_BODY
            };
            return envelope_error(dispatcher, status, message);
        }
    };

    // An empty body reads as `{}` and fails the key-count check.
    let json_val: Value = if bytes.iter().all(u8::is_ascii_whitespace) {
        Value::Object(Map::new())
    } else {
        match serde_json::from_slice(&bytes) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "request body is not JSON");
                return envelope_error(dispatcher, StatusCode::BAD_REQUEST, INVALID_JSON);
            }
        }
    };

    let envelope = dispatcher.dispatch(&json_val).await;
    let status = if envelope.is_success {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(envelope)).into_response()
}

/// Produces a failure envelope for errors caught before dispatch.
fn envelope_error(dispatcher: &Dispatcher, status: StatusCode, message: &str) -> Response {
    let body = ResponseEnvelope::failure(dispatcher.official_email(), message);
    (status, Json(body)).into_response()
}
