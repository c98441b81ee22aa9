use std::fmt;

use serde::{Deserialize, Serialize};

/// Analyst recommendation counts for one period, as delivered by the
/// external feed (most recent period first).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationTrend {
    /// Period tag carried through from the feed, e.g. "2024-06-01".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    pub strong_buy: u32,
    pub buy: u32,
    pub hold: u32,
    pub sell: u32,
    pub strong_sell: u32,
}

impl RecommendationTrend {
    pub fn total(&self) -> u32 {
        self.strong_buy + self.buy + self.hold + self.sell + self.strong_sell
    }
}

/// Discrete recommendation label derived from analyst counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    #[serde(rename = "Strong Buy")]
    StrongBuy,
    Buy,
    Hold,
    Sell,
    #[serde(rename = "Strong Sell")]
    StrongSell,
    /// Emitted when no trend data exists (zero total counts).
    #[serde(rename = "No recommendation available")]
    NoRecommendation,
}

impl Signal {
    pub fn label(self) -> &'static str {
        match self {
            Signal::StrongBuy => "Strong Buy",
            Signal::Buy => "Buy",
            Signal::Hold => "Hold",
            Signal::Sell => "Sell",
            Signal::StrongSell => "Strong Sell",
            Signal::NoRecommendation => "No recommendation available",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Direction of the trend icon shown next to an indicator value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Neutral,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_parses_camel_case_feed_payload() {
        let json = r#"{"period":"2024-06-01","strongBuy":10,"buy":10,"hold":5,"sell":3,"strongSell":2}"#;
        let trend: RecommendationTrend = serde_json::from_str(json).unwrap();
        assert_eq!(trend.strong_buy, 10);
        assert_eq!(trend.strong_sell, 2);
        assert_eq!(trend.total(), 30);
        assert_eq!(trend.period.as_deref(), Some("2024-06-01"));
    }

    #[test]
    fn signal_labels_match_display_strings() {
        assert_eq!(Signal::StrongBuy.to_string(), "Strong Buy");
        assert_eq!(Signal::Hold.to_string(), "Hold");
        assert_eq!(
            Signal::NoRecommendation.to_string(),
            "No recommendation available"
        );
        let json = serde_json::to_string(&Signal::StrongSell).unwrap();
        assert_eq!(json, "\"Strong Sell\"");
    }

    #[test]
    fn trend_direction_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&TrendDirection::Up).unwrap(), "\"up\"");
        assert_eq!(
            serde_json::to_string(&TrendDirection::Neutral).unwrap(),
            "\"neutral\""
        );
    }
}
