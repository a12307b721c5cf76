//! Server-side beta access code validation.
//!
//! Codes live in server configuration and are compared here; the HTTP
//! surface only ever reports a boolean, so codes are never shipped to the
//! browser.

/// The set of accepted beta access codes.
#[derive(Debug, Clone)]
pub struct BetaAccess {
    enabled: bool,
    codes: Vec<String>,
}

impl BetaAccess {
    /// Build from the configured flag and code list.
    ///
    /// Codes are normalized (trimmed, lowercased) once here so validation is
    /// a plain comparison.
    pub fn new(enabled: bool, codes: impl IntoIterator<Item = String>) -> Self {
        let codes = codes
            .into_iter()
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .collect();
        Self { enabled, codes }
    }

    /// Whether the beta gate is enabled at all.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Check a submitted code against the configured set.
    ///
    /// Comparison is case-insensitive and whitespace-tolerant. An empty
    /// configured set denies every code.
    pub fn validate_code(&self, code: &str) -> bool {
        if self.codes.is_empty() {
            return false;
        }
        let normalized = code.trim().to_lowercase();
        self.codes.iter().any(|c| c == &normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn access() -> BetaAccess {
        BetaAccess::new(true, ["EarlyBird".to_string(), " crew ".to_string()])
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(access().validate_code("earlybird"));
        assert!(access().validate_code("EARLYBIRD"));
        assert!(access().validate_code("  Crew  "));
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert!(!access().validate_code("latecomer"));
    }

    #[test]
    fn empty_set_denies_everything() {
        let access = BetaAccess::new(true, Vec::<String>::new());
        assert!(!access.validate_code("anything"));
        assert!(!access.validate_code(""));
    }

    #[test]
    fn blank_configured_codes_are_ignored() {
        let access = BetaAccess::new(true, ["  ".to_string()]);
        assert!(!access.validate_code(""));
    }
}
