//! Read side of the call record for the dashboard
//!
//! `GET /status` returns a snapshot and is cheap enough for once-a-second polling.
//! `GET /events` pushes the same JSON over server-sent events whenever it changes.

use axum::{
    Json,
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::Stream;
use std::convert::Infallible;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::core::CallState;
use crate::state::AppState;

pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<CallState> {
    let snapshot = state.calls.snapshot();
    debug!(status = ?snapshot.status, "Status polled");
    Json(snapshot)
}

/// Stream the call record, starting with the current value.
pub async fn status_events(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let mut rx = state.calls.subscribe();
    debug!("Status event subscriber connected");

    let stream = async_stream::stream! {
        loop {
            let snapshot = rx.borrow_and_update().clone();
            match Event::default().event("status").json_data(&snapshot) {
                Ok(event) => yield Ok::<_, Infallible>(event),
                Err(e) => {
                    warn!(error = %e, "Failed to encode status event");
                    break;
                }
            }
            if rx.changed().await.is_err() {
                break;
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}
