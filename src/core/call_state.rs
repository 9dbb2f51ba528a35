//! Shared record of the most recent screened call
//!
//! There is exactly one slot. A new screened call overwrites whatever was there,
//! including a pending operator decision; calls carry no identity key. The slot is
//! a `watch` channel so each update is atomic and push subscribers see every change.

use serde::Serialize;
use tokio::sync::watch;

/// Operator decision for the current call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CallStatus {
    #[default]
    Waiting,
    Answered,
    Rejected,
}

/// Snapshot of the latest call as shown to the operator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CallState {
    pub from: Option<String>,
    pub speech: Option<String>,
    pub status: CallStatus,
}

/// Single-slot, overwrite-on-write register for [`CallState`]
#[derive(Debug)]
pub struct CallStore {
    tx: watch::Sender<CallState>,
}

impl Default for CallStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CallStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(CallState::default());
        Self { tx }
    }

    /// Current state, cloned out of the slot.
    pub fn snapshot(&self) -> CallState {
        self.tx.borrow().clone()
    }

    /// Replaces the whole record with a freshly screened call awaiting a decision.
    pub fn record_screening(&self, from: Option<String>, speech: String) {
        self.tx.send_replace(CallState {
            from,
            speech: Some(speech),
            status: CallStatus::Waiting,
        });
    }

    /// Sets the operator decision. Returns `true` if the status changed.
    pub fn set_status(&self, status: CallStatus) -> bool {
        self.tx.send_if_modified(|state| {
            if state.status == status {
                return false;
            }
            state.status = status;
            true
        })
    }

    /// Receiver that observes every subsequent update.
    pub fn subscribe(&self) -> watch::Receiver<CallState> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let store = CallStore::new();
        assert_eq!(
            store.snapshot(),
            CallState {
                from: None,
                speech: None,
                status: CallStatus::Waiting,
            }
        );
    }

    #[test]
    fn test_initial_state_serializes_nulls() {
        let json = serde_json::to_value(CallStore::new().snapshot()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"from": null, "speech": null, "status": "waiting"})
        );
    }

    #[test]
    fn test_record_screening_overwrites_everything() {
        let store = CallStore::new();
        store.record_screening(Some("+15550000001".to_string()), "first".to_string());
        store.set_status(CallStatus::Rejected);

        store.record_screening(None, "second".to_string());

        let state = store.snapshot();
        assert_eq!(state.from, None);
        assert_eq!(state.speech.as_deref(), Some("second"));
        assert_eq!(state.status, CallStatus::Waiting);
    }

    #[test]
    fn test_set_status_reports_change() {
        let store = CallStore::new();
        assert!(!store.set_status(CallStatus::Waiting));
        assert!(store.set_status(CallStatus::Answered));
        assert!(!store.set_status(CallStatus::Answered));
        assert!(store.set_status(CallStatus::Rejected));
        assert_eq!(store.snapshot().status, CallStatus::Rejected);
    }

    #[test]
    fn test_set_status_keeps_caller_details() {
        let store = CallStore::new();
        store.record_screening(Some("+15551234567".to_string()), "Hi it's Bob".to_string());
        store.set_status(CallStatus::Answered);

        let state = store.snapshot();
        assert_eq!(state.from.as_deref(), Some("+15551234567"));
        assert_eq!(state.speech.as_deref(), Some("Hi it's Bob"));
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&CallStatus::Answered).unwrap(),
            "\"answered\""
        );
        assert_eq!(
            serde_json::to_string(&CallStatus::Rejected).unwrap(),
            "\"rejected\""
        );
    }

    #[tokio::test]
    async fn test_subscribers_see_updates() {
        let store = CallStore::new();
        let mut rx = store.subscribe();

        store.record_screening(Some("+15551234567".to_string()), "hello".to_string());
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().speech.as_deref(), Some("hello"));

        // Unchanged status does not wake subscribers
        store.set_status(CallStatus::Waiting);
        assert!(!rx.has_changed().unwrap());

        store.set_status(CallStatus::Answered);
        assert!(rx.has_changed().unwrap());
    }
}
