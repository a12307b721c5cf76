//! Registration sink port: the partner callback that records completed
//! registrations.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::payment::RegistrationRecord;

/// Port for the partner's registration callback endpoint.
///
/// Forwarding is single-shot with no server-side retry; the partner is the
/// system of record and can deduplicate on the record's order id if a caller
/// re-runs verification.
#[async_trait]
pub trait RegistrationSink: Send + Sync {
    /// Forward one verified registration to the partner.
    async fn forward(&self, record: &RegistrationRecord) -> Result<(), CallbackError>;
}

/// Errors from the partner callback endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallbackError {
    /// Connection failure or timeout before a response arrived.
    #[error("callback request failed: {0}")]
    Network(String),

    /// The partner answered with a non-success status.
    #[error("callback returned HTTP {status}")]
    Upstream { status: u16, body: String },
}
