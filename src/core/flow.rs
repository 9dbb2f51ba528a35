//! Call-flow documents returned by the webhooks
//!
//! Each builder is a pure function of the screening configuration (and, for the
//! dial, the two configured numbers). Handlers decide which one to return.

use crate::config::ScreeningConfig;

use super::twiml::{Gather, VoiceResponse};

pub const NO_RESPONSE_MESSAGE: &str = "No response received. Goodbye.";
pub const HOLD_MESSAGE: &str = "Thank you. Please hold.";

/// Stored when the provider reports no recognized speech
pub const NO_SPEECH_PLACEHOLDER: &str = "No speech detected";

pub fn greeting_prompt(config: &ScreeningConfig) -> String {
    format!(
        "Hi. {} is using call screening. Please state your name and why you are calling after the tone.",
        config.operator_name
    )
}

pub fn unavailable_message(config: &ScreeningConfig) -> String {
    format!(
        "{} is not available at this time. Goodbye.",
        config.operator_name
    )
}

/// Refuse the call with no further interaction.
pub fn spam_rejection() -> VoiceResponse {
    VoiceResponse::new().reject()
}

/// Ask the caller to identify themselves and post the speech to the screen action.
/// Silence past the timeout falls through to a goodbye and hangup.
pub fn screening_greeting(config: &ScreeningConfig) -> VoiceResponse {
    VoiceResponse::new()
        .gather(
            Gather::speech(config.screen_action.clone(), config.gather_timeout_seconds)
                .say(greeting_prompt(config)),
        )
        .say(NO_RESPONSE_MESSAGE)
        .hangup()
}

/// Acknowledge the caller and keep the line open while the operator decides.
pub fn hold_for_operator(config: &ScreeningConfig) -> VoiceResponse {
    VoiceResponse::new()
        .say(HOLD_MESSAGE)
        .pause(config.hold_seconds)
}

/// Bridge the held call to the operator's number.
pub fn connect_to_operator(caller_id: Option<&str>, destination: &str) -> VoiceResponse {
    VoiceResponse::new().dial(destination, caller_id.map(str::to_string))
}

pub fn operator_unavailable(config: &ScreeningConfig) -> VoiceResponse {
    VoiceResponse::new()
        .say(unavailable_message(config))
        .hangup()
}
