use serde::Serialize;
use tracing::{debug, info};

use crate::engine::analysis::TechnicalSummary;
use crate::engine::indicators::{ActiveIndicators, IndicatorParams, IndicatorSet};
use crate::engine::window;
use crate::errors::AnalysisError;
use crate::models::candle::{Candle, Series};
use crate::models::range::TimeRange;
use crate::models::recommendation::RecommendationTrend;

/// Everything known about one symbol: the validated full history and its
/// full-history indicator set, built as one unit before the session is
/// observable. Switching symbols constructs a new session, so a half-updated
/// series is never visible to the window or classifier stage.
#[derive(Debug, Clone)]
pub struct SymbolSession {
    symbol: String,
    series: Series,
    indicators: IndicatorSet,
}

impl SymbolSession {
    pub fn new(
        symbol: impl Into<String>,
        candles: Vec<Candle>,
        params: &IndicatorParams,
    ) -> Result<Self, AnalysisError> {
        let symbol = symbol.into();
        let series = Series::new(candles)?;
        let indicators = IndicatorSet::compute(&series, params)?;
        info!(symbol = %symbol, candles = series.len(), "symbol session ready");
        Ok(Self {
            symbol,
            series,
            indicators,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    /// Full-history indicator set; windowed views are derived from this.
    pub fn indicators(&self) -> &IndicatorSet {
        &self.indicators
    }

    /// Project the session onto the selected range and chart toggles.
    ///
    /// A pure function of its inputs, recomputed afresh on every range or
    /// toggle change: the window filters the price series, the indicator set
    /// is clipped to the window's actual edge timestamps (never
    /// recalculated), and the analysis panel reads the clipped set before
    /// chart toggles blank anything.
    pub fn display_state(
        &self,
        range: &TimeRange,
        active: ActiveIndicators,
        trends: &[RecommendationTrend],
    ) -> DisplayState {
        let visible = window::visible_candles(&self.series, range);
        debug!(symbol = %self.symbol, visible = visible.len(), "display state recomputed");

        let clipped = match window::bounds(visible) {
            Some((start, end)) => self.indicators.clip(start, end),
            None => IndicatorSet::default(),
        };

        let current_price = visible.last().map(|c| c.close);
        let analysis = current_price.map(|price| TechnicalSummary::build(&clipped, trends, price));

        DisplayState {
            visible_candles: visible.to_vec(),
            indicators: clipped.masked(active),
            current_price,
            analysis,
        }
    }
}

/// The renderable projection for the current range selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayState {
    /// Price candles inside the selected window; may be empty.
    pub visible_candles: Vec<Candle>,
    /// Window-clipped indicators with inactive ones blanked for the chart.
    pub indicators: IndicatorSet,
    /// Close of the last visible candle; `None` when the window is empty.
    pub current_price: Option<f64>,
    /// Analysis panel content; `None` when there is nothing to display.
    pub analysis: Option<TechnicalSummary>,
}
