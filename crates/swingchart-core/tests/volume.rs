// File: crates/swingchart-core/tests/volume.rs
// Purpose: Volume bar sizing and anchoring.

use swingchart_core::volume::{bar_width, layout_volume_bars};
use swingchart_core::{chartable, ChartConfig, ChartGeometry, DisplayOptions, TimeSeriesPoint};

fn with_volumes(volumes: &[Option<f64>]) -> Vec<TimeSeriesPoint> {
    volumes
        .iter()
        .enumerate()
        .map(|(i, &v)| TimeSeriesPoint {
            volume: v,
            open: Some(10.0),
            ..TimeSeriesPoint::with_close(format!("2024-03-{:02}", i + 1), 10.0 + i as f64)
        })
        .collect()
}

#[test]
fn tallest_bar_fills_the_volume_panel_and_zero_is_flat() {
    let series = with_volumes(&[Some(0.0), Some(500.0), Some(1000.0), None]);
    let points = chartable(&series);
    let cfg = ChartConfig::default();
    let opts = DisplayOptions { show_volume: true, ..DisplayOptions::default() };
    let geom = ChartGeometry::compute(&points, &opts, &cfg);
    let bars = layout_volume_bars(&points, &geom, &cfg);

    assert_eq!(bars.len(), 4);
    let heights: Vec<f64> = bars.iter().map(|b| b.rect.height()).collect();
    assert_eq!(heights, vec![0.0, 45.0, 90.0, 0.0]);
    for b in &bars {
        assert_eq!(b.rect.bottom, 360.0);
        assert!(b.rect.height() <= cfg.volume_max_height());
    }
}

#[test]
fn bars_are_centered_on_their_index() {
    let series = with_volumes(&[Some(1.0), Some(2.0), Some(3.0)]);
    let points = chartable(&series);
    let cfg = ChartConfig::default();
    let geom = ChartGeometry::compute(&points, &DisplayOptions::default(), &cfg);
    let bars = layout_volume_bars(&points, &geom, &cfg);

    // 720 / 3 - 2
    assert_eq!(bars[1].rect.width(), 238.0);
    assert_eq!((bars[1].rect.left + bars[1].rect.right) / 2.0, 360.0);
    assert_eq!(bars[0].rising, Some(true));
}

#[test]
fn bar_width_never_drops_below_two_pixels() {
    let cfg = ChartConfig::default();
    assert_eq!(bar_width(&cfg, 1000), 2.0);
    assert_eq!(bar_width(&cfg, 10), 70.0);
}
