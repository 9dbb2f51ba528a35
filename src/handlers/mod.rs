//! HTTP request handlers
//!
//! This module organizes all handlers into logical groups:
//! - `api` - Health check endpoint
//! - `voice` - Provider webhooks for incoming calls and captured speech
//! - `operator` - Connect / reject actions from the dashboard
//! - `status` - Call record snapshot and server-sent event stream
//! - `dashboard` - Operator HTML page

pub mod api;
pub mod dashboard;
pub mod operator;
pub mod status;
pub mod voice;
