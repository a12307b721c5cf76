//! Request authorization gate for the payment proxy endpoints.
//!
//! A request is trusted when it originates from the configured site (or
//! localhost), or when it carries the shared proxy secret — used by partner
//! services whose calls carry no browser origin. Pure decision over request
//! headers and immutable configuration; no side effects.

use axum::http::{header, HeaderMap};
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;
use url::Url;

use crate::config::ProxyConfig;

/// Header carrying the shared proxy secret.
const PROXY_SECRET_HEADER: &str = "x-ev-secret";

/// Authorization gate over origin and shared-secret checks.
pub struct AuthorizationGate {
    site_host: String,
    shared_secret: Option<SecretString>,
}

impl AuthorizationGate {
    /// Create a gate trusting the given hostname and optional secret.
    pub fn new(site_host: impl Into<String>, shared_secret: Option<SecretString>) -> Self {
        Self {
            site_host: site_host.into(),
            shared_secret,
        }
    }

    /// Build from proxy configuration.
    pub fn from_config(config: &ProxyConfig) -> Self {
        let site_host = config
            .site_host()
            .unwrap_or_else(|| "continuumworks.app".to_string());
        Self::new(site_host, config.shared_secret.clone())
    }

    /// Decide whether a request is authorized.
    pub fn authorize(&self, headers: &HeaderMap) -> bool {
        self.trusted_origin(headers) || self.secret_matches(headers)
    }

    /// Trusted-origin path: hostname of `Origin` (else `Referer`) equals the
    /// site hostname or `localhost`.
    fn trusted_origin(&self, headers: &HeaderMap) -> bool {
        let origin = headers
            .get(header::ORIGIN)
            .or_else(|| headers.get(header::REFERER))
            .and_then(|v| v.to_str().ok());

        let Some(origin) = origin else {
            return false;
        };
        let Some(host) = Url::parse(origin).ok().and_then(|u| u.host_str().map(str::to_string))
        else {
            return false;
        };

        host == self.site_host || host == "localhost"
    }

    /// Shared-secret path: `X-Ev-Secret` or `Authorization: Bearer <token>`
    /// equals the configured secret. Always fails when unconfigured.
    fn secret_matches(&self, headers: &HeaderMap) -> bool {
        let Some(secret) = &self.shared_secret else {
            return false;
        };

        let provided = headers
            .get(PROXY_SECRET_HEADER)
            .and_then(|v| v.to_str().ok())
            .or_else(|| bearer_token(headers));

        match provided {
            Some(value) => constant_time_eq(value.as_bytes(), secret.expose_secret().as_bytes()),
            None => false,
        }
    }
}

/// Extract a bearer token from the `Authorization` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, rest) = value.split_once(char::is_whitespace)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = rest.trim_start();
    (!token.is_empty()).then_some(token)
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    const SECRET: &str = "proxy-secret-123";

    fn gate() -> AuthorizationGate {
        AuthorizationGate::new(
            "continuumworks.app",
            Some(SecretString::new(SECRET.to_string())),
        )
    }

    fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(
                axum::http::HeaderName::from_bytes(name.as_bytes()).unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        map
    }

    #[test]
    fn site_origin_is_authorized_without_secret() {
        let h = headers(&[("origin", "https://continuumworks.app")]);
        assert!(gate().authorize(&h));
    }

    #[test]
    fn localhost_origin_is_authorized() {
        let h = headers(&[("origin", "http://localhost:3000")]);
        assert!(gate().authorize(&h));
    }

    #[test]
    fn referer_is_used_when_origin_absent() {
        let h = headers(&[("referer", "https://continuumworks.app/ev/checkout?eventId=E1")]);
        assert!(gate().authorize(&h));
    }

    #[test]
    fn foreign_origin_is_rejected() {
        let h = headers(&[("origin", "https://evil.example.com")]);
        assert!(!gate().authorize(&h));
    }

    #[test]
    fn lookalike_subdomain_is_rejected() {
        let h = headers(&[("origin", "https://continuumworks.app.evil.example.com")]);
        assert!(!gate().authorize(&h));
    }

    #[test]
    fn secret_header_authorizes_without_origin() {
        let h = headers(&[("x-ev-secret", SECRET)]);
        assert!(gate().authorize(&h));
    }

    #[test]
    fn bearer_token_authorizes_without_origin() {
        let value = format!("Bearer {SECRET}");
        let h = headers(&[("authorization", value.as_str())]);
        assert!(gate().authorize(&h));

        let value = format!("bearer   {SECRET}");
        let h = headers(&[("authorization", value.as_str())]);
        assert!(gate().authorize(&h));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let h = headers(&[("x-ev-secret", "nope")]);
        assert!(!gate().authorize(&h));
    }

    #[test]
    fn no_origin_and_no_secret_is_rejected() {
        assert!(!gate().authorize(&HeaderMap::new()));
    }

    #[test]
    fn unconfigured_secret_never_matches() {
        let gate = AuthorizationGate::new("continuumworks.app", None);
        let h = headers(&[("x-ev-secret", "")]);
        assert!(!gate.authorize(&h));
    }

    #[test]
    fn malformed_origin_is_rejected() {
        let h = headers(&[("origin", "not a url")]);
        assert!(!gate().authorize(&h));
    }

    #[test]
    fn bearer_extraction_rejects_other_schemes() {
        let h = headers(&[("authorization", "Basic dXNlcjpwYXNz")]);
        assert_eq!(bearer_token(&h), None);

        let h = headers(&[("authorization", "Bearer ")]);
        assert_eq!(bearer_token(&h), None);

        let h = headers(&[("authorization", "Bearer tok")]);
        assert_eq!(bearer_token(&h), Some("tok"));
    }
}
