// File: crates/swingchart-core/src/filter.rs
// Summary: Selects the points that can be charted (those with a close).

use crate::series::TimeSeriesPoint;

/// A point whose close is known. Borrowed from the caller's series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartPoint<'a> {
    pub point: &'a TimeSeriesPoint,
    pub close: f64,
}

/// Ordered subsequence of `series` with a defined close. Order is preserved.
pub fn chartable(series: &[TimeSeriesPoint]) -> Vec<ChartPoint<'_>> {
    series
        .iter()
        .filter_map(|point| point.close.map(|close| ChartPoint { point, close }))
        .collect()
}
