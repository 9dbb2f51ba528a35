use std::sync::Arc;

use crate::config::ServerConfig;
use crate::core::{CallStore, SpamFilter};

/// Shared application state handed to every handler
#[derive(Debug)]
pub struct AppState {
    pub config: ServerConfig,
    /// The single most-recent-call record
    pub calls: CallStore,
    pub spam_filter: SpamFilter,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Arc<Self> {
        let spam_filter = SpamFilter::new(&config.screening);
        Arc::new(Self {
            config,
            calls: CallStore::new(),
            spam_filter,
        })
    }
}
