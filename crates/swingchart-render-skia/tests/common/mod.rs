// File: crates/swingchart-render-skia/tests/common/mod.rs
// Purpose: Shared fixture series for renderer tests.

#![allow(dead_code)]

use swingchart_core::TimeSeriesPoint;

pub fn fixture_series() -> Vec<TimeSeriesPoint> {
    let closes = [100.0, 104.0, 101.5, 108.0, 106.0, 111.0, 109.5, 115.0];
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| TimeSeriesPoint {
            open: Some(c - 1.0),
            high: Some(c + 2.0),
            low: Some(c - 3.0),
            volume: Some(1_000.0 + 250.0 * i as f64),
            ma5: if i >= 2 { Some(c - 0.5) } else { None },
            ma25: if i != 4 { Some(c - 1.5) } else { None },
            ma75: if i >= 5 { Some(c - 4.0) } else { None },
            ..TimeSeriesPoint::with_close(format!("2024-06-{:02}", i + 10), c)
        })
        .collect()
}
