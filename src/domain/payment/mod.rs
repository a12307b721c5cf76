//! Payment domain: intents, confirmations, and signature verification.

mod confirmation;
mod errors;
mod intent;
mod signature;

pub use confirmation::{PaymentConfirmation, RegistrationRecord};
pub use errors::PaymentProxyError;
pub use intent::{to_minor_units, PaymentIntent};
pub use signature::SignatureVerifier;
