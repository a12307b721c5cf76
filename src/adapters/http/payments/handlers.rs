//! HTTP handlers for the payment proxy endpoints.
//!
//! Handlers check authorization and configuration, then delegate to the
//! application layer command handlers.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;

use crate::adapters::callback::CallbackForwarder;
use crate::adapters::http::auth::AuthorizationGate;
use crate::adapters::razorpay::RazorpayGateway;
use crate::application::handlers::payments::{
    CreateOrderCommand, CreateOrderHandler, VerifyPaymentCommand, VerifyPaymentHandler,
};
use crate::config::AppConfig;
use crate::domain::payment::{PaymentProxyError, SignatureVerifier};
use crate::ports::{PaymentGateway, RegistrationSink};

use super::dto::{CreateOrderBody, CreateOrderResponse, ErrorBody, VerifyBody, VerifyResponse};

/// Shared state for the payment endpoints.
///
/// Gateway, verifier, and sink are optional: when the corresponding
/// configuration is absent the endpoints answer with the matching
/// "not configured" error instead of refusing to boot.
#[derive(Clone)]
pub struct PaymentsAppState {
    pub gate: Arc<AuthorizationGate>,
    pub gateway: Option<Arc<dyn PaymentGateway>>,
    pub key_id: Option<String>,
    pub currency: String,
    pub verifier: Option<Arc<SignatureVerifier>>,
    pub sink: Option<Arc<dyn RegistrationSink>>,
}

impl PaymentsAppState {
    /// Wire the state from application configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        let gateway = RazorpayGateway::from_config(&config.gateway)
            .map(|g| Arc::new(g) as Arc<dyn PaymentGateway>);
        let verifier = config
            .gateway
            .key_secret
            .clone()
            .map(|secret| Arc::new(SignatureVerifier::new(secret)));
        let sink = CallbackForwarder::from_config(&config.callback)
            .map(|f| Arc::new(f) as Arc<dyn RegistrationSink>);

        Self {
            gate: Arc::new(AuthorizationGate::from_config(&config.proxy)),
            gateway,
            key_id: config.gateway.key_id.clone(),
            currency: config.gateway.currency.clone(),
            verifier,
            sink,
        }
    }

    fn create_order_handler(&self) -> Result<CreateOrderHandler, PaymentProxyError> {
        match (&self.gateway, &self.key_id) {
            (Some(gateway), Some(key_id)) => Ok(CreateOrderHandler::new(
                gateway.clone(),
                key_id.clone(),
                self.currency.clone(),
            )),
            _ => Err(PaymentProxyError::NotConfigured),
        }
    }

    fn verify_handler(&self) -> Result<VerifyPaymentHandler, PaymentProxyError> {
        let verifier = self
            .verifier
            .clone()
            .ok_or(PaymentProxyError::NotConfigured)?;
        Ok(VerifyPaymentHandler::new(verifier, self.sink.clone()))
    }
}

/// POST /ev/create-order - create a gateway order for a payment intent
pub async fn create_order(
    State(state): State<PaymentsAppState>,
    headers: HeaderMap,
    Json(body): Json<CreateOrderBody>,
) -> Result<impl IntoResponse, PaymentsApiError> {
    if !state.gate.authorize(&headers) {
        return Err(PaymentProxyError::Unauthorized.into());
    }

    let handler = state.create_order_handler()?;
    let cmd = CreateOrderCommand {
        amount: body.amount,
        event_id: body.event_id,
        event_name: body.event_name,
        email: body.email,
        user_id: body.user_id,
    };

    let result = handler.handle(cmd).await?;

    Ok(Json(CreateOrderResponse {
        id: result.order.id,
        amount: result.order.amount_minor,
        currency: result.order.currency,
        key_id: result.key_id,
    }))
}

/// POST /ev/verify - verify a completed payment and forward its registration
pub async fn verify_payment(
    State(state): State<PaymentsAppState>,
    headers: HeaderMap,
    Json(body): Json<VerifyBody>,
) -> Result<impl IntoResponse, PaymentsApiError> {
    if !state.gate.authorize(&headers) {
        return Err(PaymentProxyError::Unauthorized.into());
    }

    let handler = state.verify_handler()?;
    let cmd = VerifyPaymentCommand {
        order_id: body.order_id,
        payment_id: body.payment_id,
        signature: body.signature,
        event_id: body.event_id,
        event_name: body.event_name,
        amount: body.amount,
        user_id: body.user_id,
        team: body.team,
        team_name: body.team_name,
        member_emails: body.member_emails,
        additional_info: body.additional_info,
    };

    handler.handle(cmd).await?;

    Ok(Json(VerifyResponse {
        success: true,
        message: "Payment verified and registration saved".to_string(),
    }))
}

/// API error wrapper mapping the proxy error taxonomy onto HTTP statuses.
pub struct PaymentsApiError(PaymentProxyError);

impl From<PaymentProxyError> for PaymentsApiError {
    fn from(err: PaymentProxyError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PaymentsApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            PaymentProxyError::Unauthorized => StatusCode::UNAUTHORIZED,
            PaymentProxyError::NotConfigured | PaymentProxyError::OrderCreationFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            PaymentProxyError::MissingField { .. }
            | PaymentProxyError::InvalidAmount
            | PaymentProxyError::SignatureMismatch => StatusCode::BAD_REQUEST,
            PaymentProxyError::CallbackNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            PaymentProxyError::CallbackFailed => StatusCode::BAD_GATEWAY,
        };

        (status, Json(ErrorBody::new(self.0.to_string()))).into_response()
    }
}
