//! HTTP module for the beta access gate.
//!
//! Validation happens server-side against configured codes; the browser
//! only ever sees a boolean.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::{
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::config::BetaConfig;
use crate::domain::beta::BetaAccess;

/// Shared state for the beta endpoints.
#[derive(Clone)]
pub struct BetaAppState {
    pub access: Arc<BetaAccess>,
}

impl BetaAppState {
    /// Wire the state from beta configuration.
    pub fn from_config(config: &BetaConfig) -> Self {
        Self {
            access: Arc::new(BetaAccess::new(config.enabled, config.codes())),
        }
    }
}

/// Body of `POST /api/beta/validate`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidateCodeBody {
    pub code: Option<String>,
}

/// Response of `POST /api/beta/validate`.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateCodeResponse {
    pub valid: bool,
}

/// Response of `GET /api/beta`.
#[derive(Debug, Clone, Serialize)]
pub struct BetaStatusResponse {
    pub enabled: bool,
}

/// GET /api/beta - report whether the beta gate is enabled
pub async fn beta_status(State(state): State<BetaAppState>) -> Json<BetaStatusResponse> {
    Json(BetaStatusResponse {
        enabled: state.access.is_enabled(),
    })
}

/// POST /api/beta/validate - check an access code
pub async fn validate_code(
    State(state): State<BetaAppState>,
    Json(body): Json<ValidateCodeBody>,
) -> Json<ValidateCodeResponse> {
    let valid = body
        .code
        .as_deref()
        .map(|code| state.access.validate_code(code))
        .unwrap_or(false);

    Json(ValidateCodeResponse { valid })
}

/// Create the beta gate router.
///
/// # Routes
///
/// - `GET /` - whether the beta gate is enabled
/// - `POST /validate` - check an access code
pub fn beta_routes() -> Router<BetaAppState> {
    Router::new()
        .route("/", get(beta_status))
        .route("/validate", post(validate_code))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> BetaAppState {
        BetaAppState::from_config(&BetaConfig {
            enabled: true,
            access_codes: Some("EarlyBird,crew".to_string()),
        })
    }

    #[tokio::test]
    async fn status_reports_enabled_flag() {
        let response = beta_status(State(state())).await;
        assert!(response.0.enabled);
    }

    #[tokio::test]
    async fn known_code_validates_case_insensitively() {
        let body = ValidateCodeBody {
            code: Some("EARLYBIRD".to_string()),
        };
        let response = validate_code(State(state()), Json(body)).await;
        assert!(response.0.valid);
    }

    #[tokio::test]
    async fn unknown_code_is_rejected() {
        let body = ValidateCodeBody {
            code: Some("latecomer".to_string()),
        };
        let response = validate_code(State(state()), Json(body)).await;
        assert!(!response.0.valid);
    }

    #[tokio::test]
    async fn missing_code_is_rejected() {
        let response = validate_code(State(state()), Json(ValidateCodeBody::default())).await;
        assert!(!response.0.valid);
    }
}
