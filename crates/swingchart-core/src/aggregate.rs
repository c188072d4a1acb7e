// File: crates/swingchart-core/src/aggregate.rs
// Summary: Daily quote aggregation into weekly (ISO week) or monthly buckets.

use chrono::Datelike;

use crate::error::ChartResult;
use crate::prepare::parse_date;
use crate::series::{Interval, TimeSeriesPoint};

/// Aggregate date-ordered daily quotes into `interval` buckets.
///
/// Daily returns a copy. A bucket takes the last row's date, the first defined
/// open, max high, min low, last defined close and summed volume/turnover
/// (absent counts as 0). Moving averages are not carried over.
pub fn aggregate(quotes: &[TimeSeriesPoint], interval: Interval) -> ChartResult<Vec<TimeSeriesPoint>> {
    if interval == Interval::Daily {
        return Ok(quotes.to_vec());
    }

    let mut out = Vec::new();
    let mut start = 0usize;
    let mut current: Option<(i32, u32)> = None;
    for (i, q) in quotes.iter().enumerate() {
        let day = parse_date(&q.date)?;
        let key = match interval {
            Interval::Weekly => {
                let iso = day.iso_week();
                (iso.year(), iso.week())
            }
            _ => (day.year(), day.month()),
        };
        if current.is_some_and(|k| k != key) {
            out.push(aggregate_bucket(&quotes[start..i], interval));
            start = i;
        }
        current = Some(key);
    }
    if start < quotes.len() {
        out.push(aggregate_bucket(&quotes[start..], interval));
    }
    Ok(out)
}

fn aggregate_bucket(bucket: &[TimeSeriesPoint], interval: Interval) -> TimeSeriesPoint {
    let last = &bucket[bucket.len() - 1];
    let high = bucket.iter().filter_map(|q| q.high).reduce(f64::max);
    let low = bucket.iter().filter_map(|q| q.low).reduce(f64::min);
    TimeSeriesPoint {
        date: last.date.clone(),
        code: last.code.clone(),
        open: bucket.iter().find_map(|q| q.open),
        high,
        low,
        close: bucket.iter().rev().find_map(|q| q.close),
        volume: Some(bucket.iter().map(|q| q.volume.unwrap_or(0.0)).sum()),
        turnover_value: Some(bucket.iter().map(|q| q.turnover_value.unwrap_or(0.0)).sum()),
        interval,
        ..TimeSeriesPoint::default()
    }
}
