//! HTTP handlers for the subscription proxy endpoints.
//!
//! Bearer tokens are forwarded to the backend verbatim — the identity
//! provider issued them and the backend validates them; this service never
//! inspects their contents.

use std::sync::Arc;

use axum::extract::{Json, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::adapters::backend::ContinuumBackend;
use crate::adapters::http::auth::bearer_token;
use crate::adapters::http::payments::dto::ErrorBody;
use crate::config::AppConfig;
use crate::ports::{BackendApi, BackendApiError, SubscriptionCheckoutRequest};

use super::dto::{clamp_days, CheckoutBody, UsageExportQuery};

/// Shared state for the subscription endpoints.
#[derive(Clone)]
pub struct SubscriptionAppState {
    pub api: Arc<dyn BackendApi>,
    /// Origin used for redirect URLs when the request carries none.
    pub fallback_origin: String,
}

impl SubscriptionAppState {
    /// Wire the state from application configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            api: Arc::new(ContinuumBackend::from_config(&config.api)),
            fallback_origin: config.proxy.site_url.clone(),
        }
    }
}

/// POST /api/subscription/checkout - create a checkout session
pub async fn create_checkout(
    State(state): State<SubscriptionAppState>,
    headers: HeaderMap,
    Json(body): Json<CheckoutBody>,
) -> Response {
    let Some(token) = bearer_token(&headers) else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ErrorBody::new("Unauthorized")),
        )
            .into_response();
    };

    let Some(tier) = body.valid_tier() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::new("Invalid tier. Must be starter or pro.")),
        )
            .into_response();
    };

    let origin = headers
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(state.fallback_origin.as_str());

    let request = SubscriptionCheckoutRequest {
        tier: tier.to_string(),
        billing_interval: body
            .billing_interval
            .clone()
            .unwrap_or_else(|| "monthly".to_string()),
        success_url: format!("{origin}/dashboard?success=true"),
        cancel_url: format!("{origin}/pricing?canceled=true"),
    };

    match state.api.create_checkout(token, &request).await {
        Ok(value) => Json(value).into_response(),
        Err(BackendApiError::Upstream { status, body }) => {
            passthrough_json(status, &body, "Checkout failed")
        }
        Err(e @ BackendApiError::Network(_)) => {
            tracing::error!(error = %e, "checkout proxy failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorBody::new("Checkout failed")),
            )
                .into_response()
        }
    }
}

/// GET /api/subscription/usage/export - export usage as CSV
pub async fn export_usage(
    State(state): State<SubscriptionAppState>,
    headers: HeaderMap,
    Query(query): Query<UsageExportQuery>,
) -> Response {
    let Some(token) = bearer_token(&headers) else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ErrorBody::new("Unauthorized")),
        )
            .into_response();
    };

    let days = clamp_days(query.days.as_deref());

    match state.api.export_usage(token, days).await {
        Ok(csv) => (
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"continuum-usage-{days}d.csv\""),
                ),
            ],
            csv,
        )
            .into_response(),
        Err(BackendApiError::Upstream { status, body }) => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
            body,
        )
            .into_response(),
        Err(e @ BackendApiError::Network(_)) => {
            tracing::error!(error = %e, "usage export proxy failed");
            (StatusCode::BAD_GATEWAY, "Export failed".to_string()).into_response()
        }
    }
}

/// Pass an upstream JSON error through; fall back to a short message when
/// the upstream body is not JSON.
fn passthrough_json(status: u16, body: &str, fallback: &str) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => (status, Json(value)).into_response(),
        Err(_) => (status, Json(ErrorBody::new(fallback))).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::http::HeaderValue;
    use serde_json::json;
    use std::sync::Mutex;

    struct MockBackend {
        checkouts: Mutex<Vec<SubscriptionCheckoutRequest>>,
        exports: Mutex<Vec<u32>>,
        upstream_error: Option<(u16, String)>,
    }

    impl MockBackend {
        fn new() -> Self {
            Self {
                checkouts: Mutex::new(Vec::new()),
                exports: Mutex::new(Vec::new()),
                upstream_error: None,
            }
        }
    }

    #[async_trait]
    impl BackendApi for MockBackend {
        async fn create_checkout(
            &self,
            _access_token: &str,
            request: &SubscriptionCheckoutRequest,
        ) -> Result<serde_json::Value, BackendApiError> {
            self.checkouts.lock().unwrap().push(request.clone());
            if let Some((status, body)) = &self.upstream_error {
                return Err(BackendApiError::Upstream {
                    status: *status,
                    body: body.clone(),
                });
            }
            Ok(json!({"checkout_url": "https://pay.example.com/cs_1"}))
        }

        async fn export_usage(
            &self,
            _access_token: &str,
            days: u32,
        ) -> Result<String, BackendApiError> {
            self.exports.lock().unwrap().push(days);
            Ok("date,count\n2026-08-01,42\n".to_string())
        }
    }

    fn state(backend: Arc<MockBackend>) -> SubscriptionAppState {
        SubscriptionAppState {
            api: backend,
            fallback_origin: "https://continuumworks.app".to_string(),
        }
    }

    fn bearer_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer token-123"),
        );
        headers
    }

    fn checkout_body(tier: &str) -> CheckoutBody {
        CheckoutBody {
            tier: Some(tier.to_string()),
            billing_interval: None,
        }
    }

    #[tokio::test]
    async fn checkout_requires_bearer_token() {
        let backend = Arc::new(MockBackend::new());
        let response = create_checkout(
            State(state(backend.clone())),
            HeaderMap::new(),
            Json(checkout_body("pro")),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(backend.checkouts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn checkout_rejects_unknown_tier_before_backend() {
        let backend = Arc::new(MockBackend::new());
        let response = create_checkout(
            State(state(backend.clone())),
            bearer_headers(),
            Json(checkout_body("enterprise")),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(backend.checkouts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn checkout_builds_urls_from_fallback_origin() {
        let backend = Arc::new(MockBackend::new());
        let response = create_checkout(
            State(state(backend.clone())),
            bearer_headers(),
            Json(checkout_body("pro")),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let checkouts = backend.checkouts.lock().unwrap();
        assert_eq!(checkouts.len(), 1);
        assert_eq!(checkouts[0].billing_interval, "monthly");
        assert_eq!(
            checkouts[0].success_url,
            "https://continuumworks.app/dashboard?success=true"
        );
    }

    #[tokio::test]
    async fn checkout_prefers_request_origin() {
        let backend = Arc::new(MockBackend::new());
        let mut headers = bearer_headers();
        headers.insert(header::ORIGIN, HeaderValue::from_static("http://localhost:3000"));
        create_checkout(
            State(state(backend.clone())),
            headers,
            Json(checkout_body("starter")),
        )
        .await;

        let checkouts = backend.checkouts.lock().unwrap();
        assert_eq!(
            checkouts[0].cancel_url,
            "http://localhost:3000/pricing?canceled=true"
        );
    }

    #[tokio::test]
    async fn checkout_passes_upstream_error_through() {
        let backend = Arc::new(MockBackend {
            upstream_error: Some((402, r#"{"message":"payment required"}"#.to_string())),
            ..MockBackend::new()
        });
        let response = create_checkout(
            State(state(backend)),
            bearer_headers(),
            Json(checkout_body("pro")),
        )
        .await;
        assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);
    }

    #[tokio::test]
    async fn export_clamps_days_and_sets_attachment_headers() {
        let backend = Arc::new(MockBackend::new());
        let response = export_usage(
            State(state(backend.clone())),
            bearer_headers(),
            Query(UsageExportQuery {
                days: Some("365".to_string()),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/csv; charset=utf-8"
        );
        assert_eq!(
            response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
            "attachment; filename=\"continuum-usage-90d.csv\""
        );
        assert_eq!(backend.exports.lock().unwrap().as_slice(), [90]);
    }

    #[tokio::test]
    async fn export_requires_bearer_token() {
        let backend = Arc::new(MockBackend::new());
        let response = export_usage(
            State(state(backend.clone())),
            HeaderMap::new(),
            Query(UsageExportQuery::default()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(backend.exports.lock().unwrap().is_empty());
    }
}
