//! Telephony provider webhook routes
//!
//! Configure the phone number's voice webhook to `POST /voice`. The greeting it
//! returns points the speech gather at `POST /screen`.

use axum::{Router, routing::post};
use tower_http::trace::TraceLayer;

use crate::handlers::voice;
use crate::state::AppState;
use std::sync::Arc;

pub fn create_webhook_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/voice", post(voice::incoming_call))
        .route("/screen", post(voice::screen_speech))
        .layer(TraceLayer::new_for_http())
}
