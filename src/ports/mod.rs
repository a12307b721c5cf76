//! Ports: async traits at the service's seams.
//!
//! Adapters implement these against real HTTP services; tests implement
//! them as in-memory mocks.

mod backend_api;
mod payment_gateway;
mod payment_widget;
mod proxy_api;
mod registration_sink;

pub use backend_api::{BackendApi, BackendApiError, SubscriptionCheckoutRequest};
pub use payment_gateway::{CreateOrderRequest, GatewayError, GatewayOrder, OrderNotes, PaymentGateway};
pub use payment_widget::{PaymentWidget, WidgetCompletion, WidgetError, WidgetOutcome};
pub use proxy_api::{CheckoutOrder, ProxyApi, ProxyApiError};
pub use registration_sink::{CallbackError, RegistrationSink};
