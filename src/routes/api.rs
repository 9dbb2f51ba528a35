use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{operator, status};
use crate::state::AppState;
use std::sync::Arc;

/// Create the router used by the operator dashboard
///
/// - `GET /status` - current call record as JSON (polled every second)
/// - `GET /events` - the same record pushed as server-sent events
/// - `POST /connect` - connect the held call to the operator
/// - `POST /reject` - turn the held call away
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/status", get(status::get_status))
        .route("/events", get(status::status_events))
        .route("/connect", post(operator::connect_call))
        .route("/reject", post(operator::reject_call))
        .layer(TraceLayer::new_for_http())
}
