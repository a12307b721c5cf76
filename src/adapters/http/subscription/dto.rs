//! HTTP DTOs for the subscription proxy endpoints.

use serde::Deserialize;

/// Subscription tiers the backend accepts.
const VALID_TIERS: [&str; 2] = ["starter", "pro"];

/// Body of `POST /api/subscription/checkout`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutBody {
    pub tier: Option<String>,
    #[serde(default)]
    pub billing_interval: Option<String>,
}

impl CheckoutBody {
    /// The tier, if present and one the backend accepts.
    pub fn valid_tier(&self) -> Option<&str> {
        self.tier
            .as_deref()
            .filter(|tier| VALID_TIERS.contains(tier))
    }
}

/// Query of `GET /api/subscription/usage/export`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsageExportQuery {
    pub days: Option<String>,
}

/// Clamp a raw `days` parameter into 1..=90, defaulting to 30.
pub fn clamp_days(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .map(|days| days.clamp(1, 90) as u32)
        .unwrap_or(30)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_tiers_are_accepted() {
        for tier in ["starter", "pro"] {
            let body = CheckoutBody {
                tier: Some(tier.to_string()),
                billing_interval: None,
            };
            assert_eq!(body.valid_tier(), Some(tier));
        }
    }

    #[test]
    fn unknown_or_missing_tier_is_rejected() {
        let body = CheckoutBody {
            tier: Some("enterprise".to_string()),
            billing_interval: None,
        };
        assert_eq!(body.valid_tier(), None);
        assert_eq!(CheckoutBody::default().valid_tier(), None);
    }

    #[test]
    fn days_default_to_30() {
        assert_eq!(clamp_days(None), 30);
        assert_eq!(clamp_days(Some("junk")), 30);
    }

    #[test]
    fn days_are_clamped_into_range() {
        assert_eq!(clamp_days(Some("7")), 7);
        assert_eq!(clamp_days(Some("90")), 90);
        assert_eq!(clamp_days(Some("365")), 90);
        assert_eq!(clamp_days(Some("-5")), 1);
        assert_eq!(clamp_days(Some("0")), 1);
    }
}
