//! Continuum Payments - payment authorization and verification proxy
//!
//! A stateless HTTP service that creates payment-gateway orders, verifies
//! completed payments via HMAC-SHA256 signatures, and forwards registration
//! records to a partner callback endpoint.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
