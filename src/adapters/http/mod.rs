//! HTTP surface: authorization gate, per-module routers, and app assembly.

pub mod auth;
pub mod beta;
pub mod payments;
pub mod subscription;

use std::time::Duration;

use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::{extract::Json, routing::get, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;

/// Assemble the application router from configuration.
///
/// # Mounts
///
/// - `GET /health`
/// - `/ev/*` - payment proxy (create-order, verify)
/// - `/api/beta/*` - beta access gate
/// - `/api/subscription/*` - subscription proxy
pub fn app_router(config: &AppConfig) -> Router {
    let payments_state = payments::PaymentsAppState::from_config(config);
    let beta_state = beta::BetaAppState::from_config(&config.beta);
    let subscription_state = subscription::SubscriptionAppState::from_config(config);

    Router::new()
        .route("/health", get(health))
        .nest("/ev", payments::payments_routes().with_state(payments_state))
        .nest("/api/beta", beta::beta_routes().with_state(beta_state))
        .nest(
            "/api/subscription",
            subscription::subscription_routes().with_state(subscription_state),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
}

/// GET /health - liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-ev-secret"),
        ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_router_builds_from_default_config() {
        let config = AppConfig::default();
        let _router = app_router(&config);
    }

    #[test]
    fn app_router_builds_with_cors_origins() {
        let mut config = AppConfig::default();
        config.server.cors_origins = Some("https://continuumworks.app".to_string());
        let _router = app_router(&config);
    }
}
