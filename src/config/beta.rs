//! Beta access gate configuration

use serde::Deserialize;

/// Beta access configuration.
///
/// Codes are held server-side only; the HTTP surface exposes a boolean
/// validation result, never the codes themselves.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BetaConfig {
    /// Whether the beta gate is enabled
    #[serde(default)]
    pub enabled: bool,

    /// Comma-separated list of accepted access codes
    pub access_codes: Option<String>,
}

impl BetaConfig {
    /// Configured codes, trimmed, with empties removed.
    pub fn codes(&self) -> Vec<String> {
        self.access_codes
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_codes_by_default() {
        assert!(BetaConfig::default().codes().is_empty());
    }

    #[test]
    fn codes_are_split_and_trimmed() {
        let config = BetaConfig {
            enabled: true,
            access_codes: Some(" alpha, beta ,, gamma".to_string()),
        };
        assert_eq!(config.codes(), vec!["alpha", "beta", "gamma"]);
    }
}
