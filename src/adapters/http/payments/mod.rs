//! HTTP module for the payment proxy endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::PaymentsAppState;
pub use routes::payments_routes;
