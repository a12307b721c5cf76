//! Checkout flow state machine.

mod flow;

pub use flow::{CheckoutEvent, CheckoutFlow, CheckoutState, InvalidTransition};
