// File: crates/swingchart-core/src/scale.rs
// Summary: Index (X), price (Y) and volume scales plus the per-render chart geometry.

use serde::Serialize;

use crate::config::ChartConfig;
use crate::filter::ChartPoint;
use crate::geometry::Point;
use crate::types::DisplayOptions;

/// Horizontal scale spreading `len` indices evenly across `[0, width]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct IndexScale {
    pub width: f64,
    pub len: usize,
}

impl IndexScale {
    pub const fn new(width: f64, len: usize) -> Self {
        Self { width, len }
    }

    /// A lone point sits at the panel center.
    #[inline]
    pub fn to_px(&self, index: usize) -> f64 {
        if self.len > 1 {
            self.width * index as f64 / (self.len - 1) as f64
        } else {
            self.width / 2.0
        }
    }
}

/// Vertical price scale mapping `[vmin, vmax]` onto `[height, 0]` pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ValueScale {
    pub height: f64,
    pub vmin: f64,
    pub vmax: f64,
    /// `vmax - vmin`, or 1 when the domain is a single value.
    pub range: f64,
}

impl ValueScale {
    pub fn new_linear(height: f64, vmin: f64, vmax: f64) -> Self {
        let span = vmax - vmin;
        let range = if span == 0.0 { 1.0 } else { span };
        Self { height, vmin, vmax, range }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        self.height - ((v - self.vmin) / self.range) * self.height
    }

    #[inline]
    pub fn from_px(&self, py: f64) -> f64 {
        if self.height <= 0.0 {
            return self.vmin;
        }
        self.vmin + (self.height - py) / self.height * self.range
    }
}

/// Volume domain `[0, max_volume]` mapped onto bar heights in the volume panel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct VolumeScale {
    /// Largest volume in the series, floored at 1.
    pub max_volume: f64,
    pub panel_height: f64,
}

impl VolumeScale {
    pub fn new(max_volume: f64, panel_height: f64) -> Self {
        Self { max_volume: max_volume.max(1.0), panel_height }
    }

    #[inline]
    pub fn bar_height(&self, volume: Option<f64>) -> f64 {
        volume.unwrap_or(0.0) / self.max_volume * self.panel_height
    }
}

/// Everything derived from (points, options, config) that the path and bar
/// builders need. Recomputed on every render.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ChartGeometry {
    pub chart_width: f64,
    pub chart_height: f64,
    /// 0 when volume is hidden.
    pub volume_space: f64,
    pub price_height: f64,
    pub x: IndexScale,
    pub price: ValueScale,
    pub volume: VolumeScale,
}

impl ChartGeometry {
    pub fn compute(points: &[ChartPoint<'_>], options: &DisplayOptions, config: &ChartConfig) -> Self {
        let volume_space = if options.show_volume { config.volume_max_height() } else { 0.0 };
        let price_height = config.height - volume_space;
        let (vmin, vmax) = price_domain(points, options).unwrap_or((0.0, 0.0));
        let max_volume = points
            .iter()
            .filter_map(|p| p.point.volume)
            .fold(1.0_f64, f64::max);

        Self {
            chart_width: config.width,
            chart_height: config.height,
            volume_space,
            price_height,
            x: IndexScale::new(config.width, points.len()),
            price: ValueScale::new_linear(price_height, vmin, vmax),
            volume: VolumeScale::new(max_volume, config.volume_max_height()),
        }
    }

    /// Pixel position of each point's close.
    pub fn rendered_points(&self, points: &[ChartPoint<'_>]) -> Vec<Point> {
        points
            .iter()
            .enumerate()
            .map(|(i, p)| Point::new(self.x.to_px(i), self.price.to_px(p.close)))
            .collect()
    }
}

/// Min/max over every close and every defined value of each enabled indicator.
/// `None` when there is nothing to span.
pub fn price_domain(points: &[ChartPoint<'_>], options: &DisplayOptions) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for p in points {
        lo = lo.min(p.close);
        hi = hi.max(p.close);
        for key in options.enabled_indicators() {
            if let Some(v) = p.point.indicator(key) {
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
    }
    if lo.is_finite() && hi.is_finite() { Some((lo, hi)) } else { None }
}
