// File: crates/swingchart-render-skia/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;
use swingchart_core::Indicator;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub price_line: skia::Color,
    pub area_fill: skia::Color,
    pub volume_up: skia::Color,
    pub volume_down: skia::Color,
    /// Bars for periods without an open.
    pub volume_neutral: skia::Color,
    pub ma5: skia::Color,
    pub ma25: skia::Color,
    pub ma75: skia::Color,
    pub crosshair: skia::Color,
    pub tooltip_background: skia::Color,
    pub tooltip_border: skia::Color,
    pub text: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            price_line: skia::Color::from_argb(255, 64, 160, 255),
            area_fill: skia::Color::from_argb(64, 64, 160, 255),
            volume_up: skia::Color::from_argb(160, 40, 200, 120),
            volume_down: skia::Color::from_argb(160, 220, 80, 80),
            volume_neutral: skia::Color::from_argb(160, 150, 150, 160),
            ma5: skia::Color::from_argb(255, 255, 170, 60),
            ma25: skia::Color::from_argb(255, 200, 110, 255),
            ma75: skia::Color::from_argb(255, 90, 220, 200),
            crosshair: skia::Color::from_argb(255, 255, 230, 70),
            tooltip_background: skia::Color::from_argb(230, 28, 28, 34),
            tooltip_border: skia::Color::from_argb(255, 90, 90, 100),
            text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            price_line: skia::Color::from_argb(255, 32, 120, 200),
            area_fill: skia::Color::from_argb(56, 32, 120, 200),
            volume_up: skia::Color::from_argb(150, 20, 160, 90),
            volume_down: skia::Color::from_argb(150, 200, 60, 60),
            volume_neutral: skia::Color::from_argb(150, 120, 120, 130),
            ma5: skia::Color::from_argb(255, 230, 120, 0),
            ma25: skia::Color::from_argb(255, 140, 60, 200),
            ma75: skia::Color::from_argb(255, 0, 150, 130),
            crosshair: skia::Color::from_argb(255, 30, 120, 240),
            tooltip_background: skia::Color::from_argb(235, 255, 255, 255),
            tooltip_border: skia::Color::from_argb(255, 180, 180, 190),
            text: skia::Color::from_argb(255, 20, 20, 30),
        }
    }

    pub fn indicator(&self, key: Indicator) -> skia::Color {
        match key {
            Indicator::Ma5 => self.ma5,
            Indicator::Ma25 => self.ma25,
            Indicator::Ma75 => self.ma75,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}
