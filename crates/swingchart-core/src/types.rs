// File: crates/swingchart-core/src/types.rs
// Summary: Shared constants and caller-supplied display toggles.

use serde::{Deserialize, Serialize};

use crate::series::Indicator;

/// Default panel width in pixels.
pub const CHART_WIDTH: f64 = 720.0;
/// Default panel height in pixels.
pub const CHART_HEIGHT: f64 = 360.0;
/// Share of the panel height reserved for volume bars when they are shown.
pub const VOLUME_FRACTION: f64 = 0.25;

/// Layer toggles. Each one controls both the price domain and the scene.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayOptions {
    #[serde(default)]
    pub ma5: bool,
    #[serde(default)]
    pub ma25: bool,
    #[serde(default)]
    pub ma75: bool,
    #[serde(default)]
    pub show_volume: bool,
}

impl DisplayOptions {
    pub const fn all() -> Self {
        Self { ma5: true, ma25: true, ma75: true, show_volume: true }
    }

    pub const fn is_enabled(&self, key: Indicator) -> bool {
        match key {
            Indicator::Ma5 => self.ma5,
            Indicator::Ma25 => self.ma25,
            Indicator::Ma75 => self.ma75,
        }
    }

    pub fn set(&mut self, key: Indicator, on: bool) {
        match key {
            Indicator::Ma5 => self.ma5 = on,
            Indicator::Ma25 => self.ma25 = on,
            Indicator::Ma75 => self.ma75 = on,
        }
    }

    /// Enabled indicators in fixed ma5, ma25, ma75 order.
    pub fn enabled_indicators(&self) -> impl Iterator<Item = Indicator> + '_ {
        Indicator::ALL.into_iter().filter(move |k| self.is_enabled(*k))
    }
}
