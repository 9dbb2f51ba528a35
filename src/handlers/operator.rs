//! Operator decisions taken from the dashboard
//!
//! Each action flips the shared status and returns the TwiML that the held call
//! should execute next. How the provider is pointed at these endpoints while the
//! caller is on hold is configured on the provider side.

use axum::extract::State;
use std::sync::Arc;
use tracing::{info, warn};

use crate::core::{CallStatus, VoiceResponse, flow};
use crate::errors::app_error::{AppError, AppResult};
use crate::state::AppState;

/// Bridge the held call to the operator's phone.
pub async fn connect_call(State(state): State<Arc<AppState>>) -> AppResult<VoiceResponse> {
    let config = &state.config;
    let Some(destination) = config.operator_phone_number.as_deref() else {
        warn!("Connect requested but OPERATOR_PHONE_NUMBER is not configured");
        return Err(AppError::MissingConfig("OPERATOR_PHONE_NUMBER"));
    };

    if config.twilio_phone_number.is_none() {
        warn!("TWILIO_PHONE_NUMBER is not configured, dialing without a caller id");
    }

    state.calls.set_status(CallStatus::Answered);
    let from = state.calls.snapshot().from.unwrap_or_default();
    info!(%from, "Operator connected call");

    Ok(flow::connect_to_operator(
        config.twilio_phone_number.as_deref(),
        destination,
    ))
}

/// Tell the caller the operator is unavailable and hang up.
pub async fn reject_call(State(state): State<Arc<AppState>>) -> VoiceResponse {
    state.calls.set_status(CallStatus::Rejected);
    let from = state.calls.snapshot().from.unwrap_or_default();
    info!(%from, "Operator rejected call");

    flow::operator_unavailable(&state.config.screening)
}
