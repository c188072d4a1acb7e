// File: crates/swingchart-core/src/config.rs
// Summary: Panel dimensions and layout constants, overridable from JSON.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::types::{CHART_HEIGHT, CHART_WIDTH, VOLUME_FRACTION};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    /// Fraction of `height` given to the volume panel when volume is shown.
    pub volume_fraction: f64,
    pub vertical_grid_lines: usize,
    pub horizontal_grid_lines: usize,
    pub min_bar_width: f64,
    pub bar_gutter: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
            volume_fraction: VOLUME_FRACTION,
            vertical_grid_lines: 6,
            horizontal_grid_lines: 4,
            min_bar_width: 2.0,
            bar_gutter: 2.0,
        }
    }
}

impl ChartConfig {
    pub fn from_json(json: &str) -> ChartResult<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(ChartError::InvalidConfig("width must be positive"));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(ChartError::InvalidConfig("height must be positive"));
        }
        if !(0.0..1.0).contains(&self.volume_fraction) {
            return Err(ChartError::InvalidConfig("volume_fraction must lie in [0, 1)"));
        }
        if self.min_bar_width < 0.0 || self.bar_gutter < 0.0 {
            return Err(ChartError::InvalidConfig("bar sizes must be non-negative"));
        }
        Ok(())
    }

    /// Fixed height of the volume sub-panel, whether or not it is shown.
    pub fn volume_max_height(&self) -> f64 {
        self.height * self.volume_fraction
    }
}
