use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::candle::Series;

const SECS_PER_DAY: i64 = 86_400;

/// Named display ranges offered by the chart's range buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangePreset {
    #[serde(rename = "1W")]
    Week,
    #[serde(rename = "1M")]
    Month,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    Year,
    #[serde(rename = "All")]
    All,
}

impl RangePreset {
    /// Day count covered by the preset. `All` uses an unreachably large
    /// count so every preset resolves through the same subtraction.
    pub fn days(self) -> i64 {
        match self {
            RangePreset::Week => 7,
            RangePreset::Month => 30,
            RangePreset::ThreeMonths => 90,
            RangePreset::SixMonths => 180,
            RangePreset::Year => 365,
            RangePreset::All => 9999,
        }
    }

    /// Button label as shown in the range selector.
    pub fn label(self) -> &'static str {
        match self {
            RangePreset::Week => "1W",
            RangePreset::Month => "1M",
            RangePreset::ThreeMonths => "3M",
            RangePreset::SixMonths => "6M",
            RangePreset::Year => "1Y",
            RangePreset::All => "All",
        }
    }
}

/// The visible time window: a named preset or explicit epoch-second bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    Preset(RangePreset),
    Explicit { start: i64, end: i64 },
}

impl Default for TimeRange {
    fn default() -> Self {
        TimeRange::Preset(RangePreset::Month)
    }
}

impl TimeRange {
    /// Explicit range spanning two calendar dates in UTC, end-inclusive
    /// (the end bound reaches through 23:59:59 of `end`).
    pub fn between_dates(start: NaiveDate, end: NaiveDate) -> Self {
        let start = start.and_time(NaiveTime::MIN).and_utc().timestamp();
        let end = end.and_time(NaiveTime::MIN).and_utc().timestamp() + SECS_PER_DAY - 1;
        TimeRange::Explicit { start, end }
    }

    /// Resolve to concrete `[start, end]` bounds against a series. Presets
    /// pin the end to the last candle and walk back by their day count;
    /// explicit bounds pass through unchanged.
    pub fn resolve(&self, series: &Series) -> (i64, i64) {
        match *self {
            TimeRange::Preset(preset) => {
                let end = series.last().time;
                let start = end - Duration::days(preset.days()).num_seconds();
                (start, end)
            }
            TimeRange::Explicit { start, end } => (start, end),
        }
    }
}
