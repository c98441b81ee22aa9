//! Technical-analysis core for a stock charting front-end.
//!
//! Pure, synchronous transforms from an OHLCV history to what a chart and
//! analysis panel render: SMA/EMA/RSI series over full history, a visible
//! time window with indicators clipped in lockstep, and a recommendation
//! signal from analyst trend counts. All I/O (fetching candles, trends,
//! profiles) belongs to external collaborators; this crate owns no wire
//! format and performs no blocking work.

pub mod engine;
pub mod errors;
pub mod models;
pub mod session;

pub use engine::analysis::{classify, IndicatorReading, TechnicalSummary};
pub use engine::indicators::{
    ema, rsi, sma, ActiveIndicators, IndicatorKind, IndicatorParams, IndicatorSet,
};
pub use engine::window::visible_candles;
pub use errors::{AnalysisError, ErrorResponse};
pub use models::candle::{Candle, IndicatorPoint, Series};
pub use models::range::{RangePreset, TimeRange};
pub use models::recommendation::{RecommendationTrend, Signal, TrendDirection};
