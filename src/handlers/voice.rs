//! Provider webhooks for the inbound leg of a call
//!
//! `POST /voice` runs when a call arrives and `POST /screen` when the caller's
//! spoken introduction has been recognized. Both reply with TwiML.

use axum::{Form, extract::State};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::core::{SpamVerdict, VoiceResponse, flow};
use crate::state::AppState;

/// Form fields posted by the provider when a call arrives
#[derive(Debug, Default, Deserialize)]
pub struct IncomingCallForm {
    #[serde(rename = "From", default)]
    pub from: Option<String>,
    #[serde(rename = "CallerName", default)]
    pub caller_name: Option<String>,
}

/// Form fields posted by the provider once speech has been gathered
#[derive(Debug, Default, Deserialize)]
pub struct SpeechForm {
    #[serde(rename = "SpeechResult", default)]
    pub speech_result: Option<String>,
    #[serde(rename = "From", default)]
    pub from: Option<String>,
}

/// Screen a new call: reject likely spam, otherwise ask the caller who they are.
///
/// Does not touch the shared call record.
pub async fn incoming_call(
    State(state): State<Arc<AppState>>,
    Form(form): Form<IncomingCallForm>,
) -> VoiceResponse {
    let from = form.from.as_deref();
    let caller_name = form.caller_name.as_deref();

    info!(
        from = from.unwrap_or_default(),
        caller_name = caller_name.unwrap_or("Unknown"),
        "Incoming call"
    );

    match state.spam_filter.check(from, caller_name) {
        Some(SpamVerdict::BlockedPrefix(prefix)) => {
            warn!(from = from.unwrap_or_default(), %prefix, "Rejected caller with blocked prefix");
            flow::spam_rejection()
        }
        Some(SpamVerdict::VoipCallerName) => {
            warn!(
                from = from.unwrap_or_default(),
                caller_name = caller_name.unwrap_or_default(),
                "Rejected likely VOIP caller"
            );
            flow::spam_rejection()
        }
        None => flow::screening_greeting(&state.config.screening),
    }
}

/// Record what the caller said and hold them while the operator decides.
pub async fn screen_speech(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SpeechForm>,
) -> VoiceResponse {
    let speech = form
        .speech_result
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| flow::NO_SPEECH_PLACEHOLDER.to_string());

    info!(
        from = form.from.as_deref().unwrap_or_default(),
        %speech,
        "Caller screened"
    );

    state.calls.record_screening(form.from, speech);

    flow::hold_for_operator(&state.config.screening)
}
