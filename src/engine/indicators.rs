use serde::{Deserialize, Serialize};

use crate::errors::AnalysisError;
use crate::models::candle::{IndicatorPoint, Series};
use crate::models::recommendation::TrendDirection;

/// Periods used when computing the indicator set. Defaults match the
/// charting front-end: SMA 20, EMA 20, RSI 14.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorParams {
    pub sma_period: usize,
    pub ema_period: usize,
    pub rsi_period: usize,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            sma_period: 20,
            ema_period: 20,
            rsi_period: 14,
        }
    }
}

/// The three supported indicators as an explicit enumeration. Each kind
/// carries its own label, default period, compute function, and trend rule,
/// so callers never dispatch on indicator names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorKind {
    Sma,
    Ema,
    Rsi,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 3] = [IndicatorKind::Sma, IndicatorKind::Ema, IndicatorKind::Rsi];

    pub fn label(self) -> &'static str {
        match self {
            IndicatorKind::Sma => "SMA",
            IndicatorKind::Ema => "EMA",
            IndicatorKind::Rsi => "RSI",
        }
    }

    /// Whether values are denominated in price (SMA/EMA) rather than on the
    /// bounded 0-100 oscillator scale (RSI).
    pub fn is_price_scaled(self) -> bool {
        !matches!(self, IndicatorKind::Rsi)
    }

    pub fn default_period(self) -> usize {
        match self {
            IndicatorKind::Sma | IndicatorKind::Ema => 20,
            IndicatorKind::Rsi => 14,
        }
    }

    pub fn compute(
        self,
        series: &Series,
        period: usize,
    ) -> Result<Vec<IndicatorPoint>, AnalysisError> {
        match self {
            IndicatorKind::Sma => sma(series, period),
            IndicatorKind::Ema => ema(series, period),
            IndicatorKind::Rsi => rsi(series, period),
        }
    }

    /// Trend icon direction for the indicator's latest value. RSI flags the
    /// overbought/oversold bands; the averages compare price to the average.
    pub fn trend(self, latest_value: f64, current_price: f64) -> TrendDirection {
        match self {
            IndicatorKind::Rsi => {
                if latest_value > 70.0 {
                    TrendDirection::Up
                } else if latest_value < 30.0 {
                    TrendDirection::Down
                } else {
                    TrendDirection::Neutral
                }
            }
            IndicatorKind::Sma | IndicatorKind::Ema => {
                if current_price > latest_value {
                    TrendDirection::Up
                } else if current_price < latest_value {
                    TrendDirection::Down
                } else {
                    TrendDirection::Neutral
                }
            }
        }
    }

    /// Panel wording for the trend: Bullish/Bearish for the averages,
    /// Overbought/Oversold for RSI.
    pub fn condition(self, latest_value: f64, current_price: f64) -> &'static str {
        match (self, self.trend(latest_value, current_price)) {
            (IndicatorKind::Rsi, TrendDirection::Up) => "Overbought",
            (IndicatorKind::Rsi, TrendDirection::Down) => "Oversold",
            (_, TrendDirection::Up) => "Bullish",
            (_, TrendDirection::Down) => "Bearish",
            (_, TrendDirection::Neutral) => "Neutral",
        }
    }
}

/// Which indicators the chart currently draws. The analysis panel ignores
/// these toggles; they only blank chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveIndicators {
    pub sma: bool,
    pub ema: bool,
    pub rsi: bool,
}

impl ActiveIndicators {
    pub const ALL: ActiveIndicators = ActiveIndicators {
        sma: true,
        ema: true,
        rsi: true,
    };

    pub fn enabled(self, kind: IndicatorKind) -> bool {
        match kind {
            IndicatorKind::Sma => self.sma,
            IndicatorKind::Ema => self.ema,
            IndicatorKind::Rsi => self.rsi,
        }
    }
}

// SMA alone starts enabled, matching the chart's initial toggles.
impl Default for ActiveIndicators {
    fn default() -> Self {
        Self {
            sma: true,
            ema: false,
            rsi: false,
        }
    }
}

/// The three indicator series, always computed together over one source
/// series and always re-clipped together when the visible window changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub sma: Vec<IndicatorPoint>,
    pub ema: Vec<IndicatorPoint>,
    pub rsi: Vec<IndicatorPoint>,
}

impl IndicatorSet {
    /// Compute all three indicators over the full history.
    ///
    /// A history shorter than the EMA period gets an empty EMA instead of an
    /// error, so short symbols still chart SMA/RSI. Zero periods are still
    /// rejected.
    pub fn compute(series: &Series, params: &IndicatorParams) -> Result<Self, AnalysisError> {
        let ema = if series.len() < params.ema_period {
            check_period(params.ema_period)?;
            Vec::new()
        } else {
            ema(series, params.ema_period)?
        };
        Ok(Self {
            sma: sma(series, params.sma_period)?,
            ema,
            rsi: rsi(series, params.rsi_period)?,
        })
    }

    pub fn points(&self, kind: IndicatorKind) -> &[IndicatorPoint] {
        match kind {
            IndicatorKind::Sma => &self.sma,
            IndicatorKind::Ema => &self.ema,
            IndicatorKind::Rsi => &self.rsi,
        }
    }

    /// Most recent point of one indicator, if it has any.
    pub fn latest(&self, kind: IndicatorKind) -> Option<IndicatorPoint> {
        self.points(kind).last().copied()
    }

    /// Keep only points with `start <= time <= end`. A pure filter:
    /// trailing-window indicators are only correct when computed over full
    /// history, so sub-windows never recalculate values.
    pub fn clip(&self, start: i64, end: i64) -> IndicatorSet {
        let clip = |points: &[IndicatorPoint]| -> Vec<IndicatorPoint> {
            points
                .iter()
                .filter(|p| p.time >= start && p.time <= end)
                .copied()
                .collect()
        };
        IndicatorSet {
            sma: clip(&self.sma),
            ema: clip(&self.ema),
            rsi: clip(&self.rsi),
        }
    }

    /// Blank out indicators the chart is not drawing; an inactive indicator
    /// renders as an empty series.
    pub fn masked(&self, active: ActiveIndicators) -> IndicatorSet {
        let mask = |kind: IndicatorKind, points: &[IndicatorPoint]| -> Vec<IndicatorPoint> {
            if active.enabled(kind) {
                points.to_vec()
            } else {
                Vec::new()
            }
        };
        IndicatorSet {
            sma: mask(IndicatorKind::Sma, &self.sma),
            ema: mask(IndicatorKind::Ema, &self.ema),
            rsi: mask(IndicatorKind::Rsi, &self.rsi),
        }
    }
}

fn check_period(period: usize) -> Result<(), AnalysisError> {
    if period == 0 {
        return Err(AnalysisError::InvalidParameter("period must be > 0".into()));
    }
    Ok(())
}

// ── SMA ──

/// Simple Moving Average of closes. One point per trailing window,
/// timestamped at the window's last candle. A history shorter than `period`
/// produces an empty series.
pub fn sma(series: &Series, period: usize) -> Result<Vec<IndicatorPoint>, AnalysisError> {
    check_period(period)?;
    let candles = series.candles();
    if candles.len() < period {
        return Ok(Vec::new());
    }

    let mut out = Vec::with_capacity(candles.len() - period + 1);
    let mut sum: f64 = candles[..period].iter().map(|c| c.close).sum();
    out.push(IndicatorPoint {
        time: candles[period - 1].time,
        value: sum / period as f64,
    });
    for i in period..candles.len() {
        sum += candles[i].close - candles[i - period].close;
        out.push(IndicatorPoint {
            time: candles[i].time,
            value: sum / period as f64,
        });
    }
    Ok(out)
}

// ── EMA ──

/// Exponential Moving Average, seeded with the SMA of the first `period`
/// closes: the first output point equals that SMA, timestamped at index
/// `period - 1`. Unlike `sma`/`rsi`, a history shorter than `period` is an
/// error since there is no seed window.
pub fn ema(series: &Series, period: usize) -> Result<Vec<IndicatorPoint>, AnalysisError> {
    check_period(period)?;
    let candles = series.candles();
    if candles.len() < period {
        return Err(AnalysisError::InvalidParameter(format!(
            "EMA period {} exceeds series length {}",
            period,
            candles.len()
        )));
    }

    let multiplier = 2.0 / (period as f64 + 1.0);
    let mut value = candles[..period].iter().map(|c| c.close).sum::<f64>() / period as f64;

    let mut out = Vec::with_capacity(candles.len() - period + 1);
    out.push(IndicatorPoint {
        time: candles[period - 1].time,
        value,
    });
    for candle in &candles[period..] {
        value = (candle.close - value) * multiplier + value;
        out.push(IndicatorPoint {
            time: candle.time,
            value,
        });
    }
    Ok(out)
}

// ── RSI ──

/// Relative Strength Index with Wilder smoothing. Seeds from a simple
/// average of the first `period` candle-to-candle changes, then applies
/// `avg = ((period-1)*avg + sample) / period`. Emits one point per candle
/// from index `period` onward; shorter histories produce an empty series.
pub fn rsi(series: &Series, period: usize) -> Result<Vec<IndicatorPoint>, AnalysisError> {
    check_period(period)?;
    let candles = series.candles();
    if candles.len() <= period {
        return Ok(Vec::new());
    }

    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;
    for i in 1..=period {
        let change = candles[i].close - candles[i - 1].close;
        if change > 0.0 {
            avg_gain += change;
        } else {
            avg_loss -= change;
        }
    }
    avg_gain /= period as f64;
    avg_loss /= period as f64;

    let mut out = Vec::with_capacity(candles.len() - period);
    out.push(IndicatorPoint {
        time: candles[period].time,
        value: rsi_value(avg_gain, avg_loss),
    });

    for i in (period + 1)..candles.len() {
        let change = candles[i].close - candles[i - 1].close;
        let gain = change.max(0.0);
        let loss = (-change).max(0.0);
        avg_gain = (avg_gain * (period as f64 - 1.0) + gain) / period as f64;
        avg_loss = (avg_loss * (period as f64 - 1.0) + loss) / period as f64;
        out.push(IndicatorPoint {
            time: candles[i].time,
            value: rsi_value(avg_gain, avg_loss),
        });
    }
    Ok(out)
}

/// RSI from smoothed averages. Division by zero never leaks: an all-gain
/// window clamps to 100, a flat window reports the 50 midpoint.
fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return if avg_gain == 0.0 { 50.0 } else { 100.0 };
    }
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}

// ══════════════════════════════════════════════════════════════
// Tests
// ══════════════════════════════════════════════════════════════
