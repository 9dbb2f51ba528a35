pub mod api;
pub mod webhooks;

use std::sync::Arc;
use std::time::Duration;

use anyhow::anyhow;
use axum::{Router, routing::get};
use http::{HeaderValue, Method, header};
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::handlers;
use crate::state::AppState;

/// Rates at or above this value switch the limiter off (load testing)
pub const RATE_LIMIT_DISABLED_AT: u32 = 100_000;

/// Build the complete application: routes, state and the middleware stack.
pub fn create_app(config: ServerConfig) -> anyhow::Result<Router> {
    let router = create_router(AppState::new(config.clone()));
    apply_middleware(router, &config)
}

/// All routes with state attached, without middleware
///
/// Public pages (dashboard and health check), provider webhooks and the
/// operator API.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard::dashboard))
        .route("/health", get(handlers::api::health_check))
        .merge(webhooks::create_webhook_router())
        .merge(api::create_api_router())
        .with_state(state)
}

/// Wrap a router in panic recovery, CORS, the per-IP rate limit and the
/// security headers.
pub fn apply_middleware(router: Router, config: &ServerConfig) -> anyhow::Result<Router> {
    let rate_limit_rps = config.rate_limit_requests_per_second;
    let rate_limit_burst = config.rate_limit_burst_size;

    // One token is refilled every `period`, so the period is the inverse of the rate
    let governor_layer = if rate_limit_rps < RATE_LIMIT_DISABLED_AT {
        let governor_config = GovernorConfigBuilder::default()
            .period(Duration::from_secs(1) / rate_limit_rps.max(1))
            .burst_size(rate_limit_burst.max(1))
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .ok_or_else(|| anyhow!("Failed to build rate limiter config"))?;
        Some(GovernorLayer::new(governor_config))
    } else {
        info!("Rate limiting disabled (rate >= {RATE_LIMIT_DISABLED_AT}/s)");
        None
    };

    let cors_layer = match config.cors_allowed_origins.as_deref() {
        Some("*") => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
            .allow_credentials(false),
        Some(origins) => {
            // Parse comma-separated origins
            let origins: Vec<_> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE])
                .allow_credentials(true)
        }
        None => {
            info!(
                "CORS not configured, defaulting to same-origin only. \
                 Set CORS_ALLOWED_ORIGINS to enable cross-origin access."
            );
            // No allow_origin = same-origin only
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE])
                .allow_credentials(false)
        }
    };

    let security_headers = tower::ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ));

    Ok(router
        .layer(CatchPanicLayer::new())
        .layer(cors_layer)
        .layer(tower::util::option_layer(governor_layer))
        .layer(security_headers))
}
