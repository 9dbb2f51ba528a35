use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::core::twiml::escape_xml;
use crate::state::AppState;

const DASHBOARD_TEMPLATE: &str = include_str!("dashboard.html");

/// Render the operator page with the configured operator name filled in.
pub fn render_dashboard(operator_name: &str) -> String {
    DASHBOARD_TEMPLATE.replace("{{operator_name}}", &escape_xml(operator_name))
}

pub async fn dashboard(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_dashboard(&state.config.screening.operator_name))
}
