// File: crates/swingchart-core/src/volume.rs
// Summary: Volume sub-panel bar rectangles, anchored to the bottom of the panel.

use serde::Serialize;

use crate::config::ChartConfig;
use crate::filter::ChartPoint;
use crate::geometry::Rect;
use crate::scale::ChartGeometry;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct VolumeBar {
    pub index: usize,
    pub rect: Rect,
    /// Whether the period closed at or above its open; `None` without an open.
    pub rising: Option<bool>,
}

/// `max(min_bar_width, width / n - gutter)`.
pub fn bar_width(config: &ChartConfig, len: usize) -> f64 {
    if len == 0 {
        return config.min_bar_width;
    }
    (config.width / len as f64 - config.bar_gutter).max(config.min_bar_width)
}

/// One bar per point, centered on its x and growing upward from the panel bottom.
pub fn layout_volume_bars(points: &[ChartPoint<'_>], geometry: &ChartGeometry, config: &ChartConfig) -> Vec<VolumeBar> {
    let width = bar_width(config, points.len());
    let bottom = geometry.chart_height;
    points
        .iter()
        .enumerate()
        .map(|(index, p)| {
            let height = geometry.volume.bar_height(p.point.volume);
            let x = geometry.x.to_px(index);
            VolumeBar {
                index,
                rect: Rect::from_ltrb(x - width / 2.0, bottom - height, x + width / 2.0, bottom),
                rising: p.point.open.map(|open| p.close >= open),
            }
        })
        .collect()
}
