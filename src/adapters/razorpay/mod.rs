//! Razorpay gateway adapter.

mod gateway;
mod types;

pub use gateway::RazorpayGateway;
