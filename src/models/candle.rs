use serde::{Deserialize, Serialize};

use crate::errors::AnalysisError;

/// A single OHLCV candle/bar, timestamped in epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    fn is_finite(&self) -> bool {
        self.open.is_finite()
            && self.high.is_finite()
            && self.low.is_finite()
            && self.close.is_finite()
            && self.volume.is_finite()
    }
}

/// One output point of an indicator, aligned to a source candle timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint {
    pub time: i64,
    pub value: f64,
}

/// A validated, immutable OHLCV history for one symbol.
///
/// Construction enforces the series invariants: non-empty, strictly
/// ascending timestamps (no duplicates), finite numeric fields. There is no
/// mutating API; new data replaces the whole series.
#[derive(Debug, Clone)]
pub struct Series(Vec<Candle>);

impl Series {
    pub fn new(candles: Vec<Candle>) -> Result<Self, AnalysisError> {
        if candles.is_empty() {
            return Err(AnalysisError::InvalidSeries("series is empty".into()));
        }
        for (i, candle) in candles.iter().enumerate() {
            if !candle.is_finite() {
                return Err(AnalysisError::InvalidSeries(format!(
                    "non-finite value at index {}",
                    i
                )));
            }
            if i > 0 && candle.time <= candles[i - 1].time {
                return Err(AnalysisError::InvalidSeries(format!(
                    "timestamps not strictly ascending at index {}",
                    i
                )));
            }
        }
        Ok(Self(candles))
    }

    pub fn candles(&self) -> &[Candle] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Oldest candle. Safe to index: a series is never empty.
    pub fn first(&self) -> &Candle {
        &self.0[0]
    }

    /// Most recent candle.
    pub fn last(&self) -> &Candle {
        &self.0[self.0.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(time: i64, close: f64) -> Candle {
        Candle {
            time,
            open: close,
            high: close,
            low: close,
            close,
            volume: 1000.0,
        }
    }

    #[test]
    fn valid_series_is_accepted() {
        let series = Series::new(vec![candle(1, 10.0), candle(2, 11.0), candle(3, 9.5)]).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.first().time, 1);
        assert_eq!(series.last().close, 9.5);
    }

    #[test]
    fn empty_series_is_rejected() {
        let err = Series::new(vec![]).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidSeries(_)));
    }

    #[test]
    fn unsorted_series_is_rejected() {
        let err = Series::new(vec![candle(2, 10.0), candle(1, 11.0)]).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidSeries(_)));
    }

    #[test]
    fn duplicate_timestamp_is_rejected() {
        let err = Series::new(vec![candle(1, 10.0), candle(1, 11.0)]).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidSeries(_)));
    }

    #[test]
    fn non_finite_field_is_rejected() {
        let mut bad = candle(2, 11.0);
        bad.volume = f64::NAN;
        let err = Series::new(vec![candle(1, 10.0), bad]).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidSeries(_)));

        let mut bad = candle(2, 11.0);
        bad.close = f64::INFINITY;
        let err = Series::new(vec![candle(1, 10.0), bad]).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidSeries(_)));
    }

    #[test]
    fn candle_serializes_with_flat_field_names() {
        let json = serde_json::to_value(candle(42, 10.5)).unwrap();
        assert_eq!(json["time"], 42);
        assert_eq!(json["close"], 10.5);
        assert_eq!(json["volume"], 1000.0);
    }
}
