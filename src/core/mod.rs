pub mod call_state;
pub mod flow;
pub mod spam;
pub mod twiml;

// Re-export commonly used types for convenience
pub use call_state::{CallState, CallStatus, CallStore};
pub use spam::{SpamFilter, SpamVerdict};
pub use twiml::{Gather, Verb, VoiceResponse};
