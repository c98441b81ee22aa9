use tracing::debug;

use crate::models::candle::{Candle, Series};
use crate::models::range::TimeRange;

/// Contiguous sub-slice of the series with `start <= time <= end` for the
/// resolved range. An empty slice is the valid "nothing to display" result
/// for a range with no overlapping data, never an error.
pub fn visible_candles<'a>(series: &'a Series, range: &TimeRange) -> &'a [Candle] {
    let (start, end) = range.resolve(series);
    let visible = slice_between(series.candles(), start, end);
    debug!(start, end, visible = visible.len(), "resolved visible window");
    visible
}

/// First and last timestamps of the visible window; these clip the
/// indicator series in lockstep with the price window.
pub fn bounds(visible: &[Candle]) -> Option<(i64, i64)> {
    match (visible.first(), visible.last()) {
        (Some(first), Some(last)) => Some((first.time, last.time)),
        _ => None,
    }
}

// Candles are strictly ascending by time, so both bounds binary-search.
fn slice_between(candles: &[Candle], start: i64, end: i64) -> &[Candle] {
    let lo = candles.partition_point(|c| c.time < start);
    let hi = candles.partition_point(|c| c.time <= end);
    &candles[lo..hi]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::range::RangePreset;

    const DAY: i64 = 86_400;

    fn daily_series(days: i64) -> Series {
        let candles = (1..=days)
            .map(|d| Candle {
                time: d * DAY,
                open: 100.0,
                high: 101.0,
                low: 99.0,
                close: 100.0 + d as f64,
                volume: 1000.0,
            })
            .collect();
        Series::new(candles).unwrap()
    }

    #[test]
    fn one_week_preset_keeps_last_seven_days_inclusive() {
        let series = daily_series(30);
        let visible = visible_candles(&series, &TimeRange::Preset(RangePreset::Week));
        // [day 23, day 30] inclusive: start = end - 7 days lands on day 23.
        assert_eq!(visible.len(), 8);
        assert_eq!(visible[0].time, 23 * DAY);
        assert_eq!(visible[visible.len() - 1].time, 30 * DAY);
    }

    #[test]
    fn all_preset_returns_entire_series() {
        let series = daily_series(30);
        let visible = visible_candles(&series, &TimeRange::Preset(RangePreset::All));
        assert_eq!(visible.len(), series.len());
    }

    #[test]
    fn range_before_series_start_is_empty_not_error() {
        let series = daily_series(30);
        let range = TimeRange::Explicit {
            start: -100 * DAY,
            end: -50 * DAY,
        };
        assert!(visible_candles(&series, &range).is_empty());
    }

    #[test]
    fn explicit_bounds_are_inclusive() {
        let series = daily_series(10);
        let range = TimeRange::Explicit {
            start: 3 * DAY,
            end: 5 * DAY,
        };
        let visible = visible_candles(&series, &range);
        assert_eq!(visible.len(), 3);
        assert_eq!(visible[0].time, 3 * DAY);
        assert_eq!(visible[2].time, 5 * DAY);
    }

    #[test]
    fn reselection_is_idempotent() {
        let series = daily_series(30);
        let range = TimeRange::Preset(RangePreset::Month);
        let first = visible_candles(&series, &range).to_vec();
        let second = visible_candles(&series, &range).to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn bounds_follow_visible_edges() {
        let series = daily_series(30);
        let visible = visible_candles(&series, &TimeRange::Preset(RangePreset::Week));
        assert_eq!(bounds(visible), Some((23 * DAY, 30 * DAY)));
        assert_eq!(bounds(&[]), None);
    }
}
