//! Payment signature verification.
//!
//! The gateway's widget returns an HMAC-SHA256 over
//! `<order_id>|<payment_id>`, keyed with the gateway key secret. Recomputing
//! that MAC server-side is the sole integrity check that the payment
//! actually completed under this credential.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::errors::PaymentProxyError;

type HmacSha256 = Hmac<Sha256>;

/// Verifier holding the server-side gateway key secret.
pub struct SignatureVerifier {
    key_secret: SecretString,
}

impl SignatureVerifier {
    /// Create a verifier from the gateway key secret.
    pub fn new(key_secret: SecretString) -> Self {
        Self { key_secret }
    }

    /// Hex-encoded HMAC-SHA256 over `<order_id>|<payment_id>`.
    pub fn expected_signature(&self, order_id: &str, payment_id: &str) -> String {
        hex::encode(self.compute(order_id, payment_id))
    }

    /// Verify a widget-supplied signature.
    ///
    /// The provided value is hex-decoded and compared in constant time
    /// against the recomputed MAC; malformed hex counts as a mismatch.
    ///
    /// # Errors
    ///
    /// Returns `SignatureMismatch` if the signature does not match.
    pub fn verify(
        &self,
        order_id: &str,
        payment_id: &str,
        signature: &str,
    ) -> Result<(), PaymentProxyError> {
        let provided = hex::decode(signature.trim())
            .map_err(|_| PaymentProxyError::SignatureMismatch)?;
        let expected = self.compute(order_id, payment_id);

        if !constant_time_compare(&expected, &provided) {
            return Err(PaymentProxyError::SignatureMismatch);
        }
        Ok(())
    }

    fn compute(&self, order_id: &str, payment_id: &str) -> Vec<u8> {
        let mut mac = HmacSha256::new_from_slice(self.key_secret.expose_secret().as_bytes())
            .expect("HMAC accepts any key size");
        mac.update(order_id.as_bytes());
        mac.update(b"|");
        mac.update(payment_id.as_bytes());
        mac.finalize().into_bytes().to_vec()
    }
}

/// Constant-time comparison of two byte slices.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
