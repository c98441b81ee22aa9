use serde::Serialize;

use crate::engine::indicators::{IndicatorKind, IndicatorSet};
use crate::models::recommendation::{RecommendationTrend, Signal, TrendDirection};

/// Classify aggregate analyst counts into a discrete signal.
///
/// Thresholds on the buy percentage `(strongBuy + buy) / total * 100`:
/// `>60` Strong Buy, `>50` Buy, `>40` Hold, `>30` Sell, else Strong Sell.
/// Zero total counts mean no data, not a division by zero.
pub fn classify(trend: &RecommendationTrend) -> Signal {
    let total = trend.total();
    if total == 0 {
        return Signal::NoRecommendation;
    }
    let buy_pct = (trend.strong_buy + trend.buy) as f64 / total as f64 * 100.0;
    if buy_pct > 60.0 {
        Signal::StrongBuy
    } else if buy_pct > 50.0 {
        Signal::Buy
    } else if buy_pct > 40.0 {
        Signal::Hold
    } else if buy_pct > 30.0 {
        Signal::Sell
    } else {
        Signal::StrongSell
    }
}

/// Latest visible state of one indicator as shown in the analysis panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorReading {
    pub kind: IndicatorKind,
    /// Latest visible value; `None` when the indicator has no visible points.
    pub value: Option<f64>,
    pub trend: TrendDirection,
    pub condition: &'static str,
}

/// What the technical-analysis panel renders: the classified signal plus one
/// reading per indicator against the current price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnicalSummary {
    pub signal: Signal,
    pub current_price: f64,
    pub readings: Vec<IndicatorReading>,
}

impl TechnicalSummary {
    /// Build from the window-clipped indicator set and the trend feed
    /// (most-recent-first; only the newest period is consulted).
    pub fn build(
        indicators: &IndicatorSet,
        trends: &[RecommendationTrend],
        current_price: f64,
    ) -> Self {
        let signal = trends.first().map_or(Signal::NoRecommendation, classify);
        let readings = IndicatorKind::ALL
            .iter()
            .map(|&kind| match indicators.latest(kind) {
                Some(point) => IndicatorReading {
                    kind,
                    value: Some(point.value),
                    trend: kind.trend(point.value, current_price),
                    condition: kind.condition(point.value, current_price),
                },
                None => IndicatorReading {
                    kind,
                    value: None,
                    trend: TrendDirection::Neutral,
                    condition: "Neutral",
                },
            })
            .collect();
        Self {
            signal,
            current_price,
            readings,
        }
    }

    pub fn reading(&self, kind: IndicatorKind) -> Option<&IndicatorReading> {
        self.readings.iter().find(|r| r.kind == kind)
    }
}
