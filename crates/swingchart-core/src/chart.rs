// File: crates/swingchart-core/src/chart.rs
// Summary: Chart composer owning hover state and assembling the renderable scene.

use serde::Serialize;
use tracing::{debug, trace};

use crate::config::ChartConfig;
use crate::error::ChartResult;
use crate::filter::{chartable, ChartPoint};
use crate::geometry::Point;
use crate::grid::{gridlines, GridLine};
use crate::path::{area_path, indicator_path, line_path, DashPattern, IndicatorPath, Path};
use crate::pointer::{PointerEvent, PointerSurface};
use crate::scale::ChartGeometry;
use crate::series::TimeSeriesPoint;
use crate::tooltip::Tooltip;
use crate::types::DisplayOptions;
use crate::view::HoverState;
use crate::volume::{layout_volume_bars, VolumeBar};

/// Vertical guide at the hovered index.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Crosshair {
    pub index: usize,
    pub x: f64,
    pub top: f64,
    pub bottom: f64,
    /// The hovered close in panel pixels.
    pub marker: Point,
}

/// Everything a vector surface needs to draw one frame, in paint order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scene {
    pub geometry: ChartGeometry,
    pub gridlines: Vec<GridLine>,
    pub volume_bars: Vec<VolumeBar>,
    pub area: Path,
    pub line: Path,
    pub indicators: Vec<IndicatorPath>,
    pub crosshair: Option<Crosshair>,
    pub tooltip: Option<Tooltip>,
}

impl Scene {
    pub fn width(&self) -> f64 { self.geometry.chart_width }
    pub fn height(&self) -> f64 { self.geometry.chart_height }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "scene", rename_all = "snake_case")]
pub enum ComposeOutcome {
    /// No point has a close; show a static message instead of a chart.
    InsufficientData,
    Drawable(Box<Scene>),
}

impl ComposeOutcome {
    pub fn scene(&self) -> Option<&Scene> {
        match self {
            ComposeOutcome::InsufficientData => None,
            ComposeOutcome::Drawable(scene) => Some(scene),
        }
    }

    pub fn is_drawable(&self) -> bool {
        matches!(self, ComposeOutcome::Drawable(_))
    }
}

/// Pure composition of one frame. Identical inputs give identical scenes.
pub fn compose(
    series: &[TimeSeriesPoint],
    options: &DisplayOptions,
    config: &ChartConfig,
    hover: HoverState,
) -> ComposeOutcome {
    debug_assert!(config.validate().is_ok(), "compose called with an invalid ChartConfig: {config:?}");
    let points = chartable(series);
    if points.is_empty() {
        debug!(input_len = series.len(), "no point has a close; insufficient data");
        return ComposeOutcome::InsufficientData;
    }
    ComposeOutcome::Drawable(Box::new(compose_points(&points, options, config, hover)))
}

fn compose_points(
    points: &[ChartPoint<'_>],
    options: &DisplayOptions,
    config: &ChartConfig,
    hover: HoverState,
) -> Scene {
    let geometry = ChartGeometry::compute(points, options, config);
    let rendered = geometry.rendered_points(points);

    let volume_bars = if options.show_volume {
        layout_volume_bars(points, &geometry, config)
    } else {
        Vec::new()
    };

    let indicators = options
        .enabled_indicators()
        .filter_map(|key| {
            indicator_path(points, key, &geometry).map(|path| IndicatorPath {
                indicator: key,
                dash: DashPattern::for_indicator(key),
                path,
            })
        })
        .collect();

    // A stale index from a longer series is treated as no hover.
    let hovered = hover.index().filter(|&i| i < points.len());
    let crosshair = hovered.map(|index| Crosshair {
        index,
        x: rendered[index].x,
        top: 0.0,
        bottom: geometry.chart_height,
        marker: rendered[index],
    });
    let tooltip = hovered.map(|index| Tooltip::for_point(index, &points[index], options));

    Scene {
        gridlines: gridlines(
            geometry.chart_width,
            geometry.chart_height,
            config.vertical_grid_lines,
            config.horizontal_grid_lines,
        ),
        volume_bars,
        area: area_path(&rendered, geometry.price_height),
        line: line_path(&rendered),
        indicators,
        crosshair,
        tooltip,
        geometry,
    }
}

/// Owns the series, display toggles and hover state for one chart panel.
pub struct ChartComposer {
    series: Vec<TimeSeriesPoint>,
    options: DisplayOptions,
    config: ChartConfig,
    hover: HoverState,
    chartable_len: usize,
}

impl ChartComposer {
    pub fn new(series: Vec<TimeSeriesPoint>, options: DisplayOptions) -> Self {
        let chartable_len = chartable(&series).len();
        Self { series, options, config: ChartConfig::default(), hover: HoverState::Idle, chartable_len }
    }

    /// Like [`Self::new`] with a custom panel layout; the config is validated first.
    pub fn with_config(series: Vec<TimeSeriesPoint>, options: DisplayOptions, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let mut composer = Self::new(series, options);
        composer.config = config;
        Ok(composer)
    }

    pub fn series(&self) -> &[TimeSeriesPoint] { &self.series }
    pub fn options(&self) -> DisplayOptions { self.options }
    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn hover(&self) -> HoverState { self.hover }

    /// Number of points that survive the close filter.
    pub fn chartable_len(&self) -> usize { self.chartable_len }

    /// Replace the data wholesale. Hover is reset since indices refer to the old series.
    pub fn set_series(&mut self, series: Vec<TimeSeriesPoint>) {
        self.chartable_len = chartable(&series).len();
        self.series = series;
        self.hover = HoverState::Idle;
        debug!(len = self.series.len(), chartable = self.chartable_len, "series replaced");
    }

    pub fn set_options(&mut self, options: DisplayOptions) {
        self.options = options;
    }

    /// Rejects an invalid config and keeps the current one.
    pub fn set_config(&mut self, config: ChartConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn on_pointer_move(&mut self, offset: f64, width: f64) -> HoverState {
        let next = self.hover.on_pointer_move(offset, width, self.chartable_len);
        if next != self.hover {
            trace!(offset, width, ?next, "hover moved");
        }
        self.hover = next;
        self.hover
    }

    /// Same as [`Self::on_pointer_move`], reading the sample from a surface.
    pub fn on_pointer_move_from<S: PointerSurface + ?Sized>(&mut self, surface: &S) -> HoverState {
        self.on_pointer_move(surface.pointer_offset(), surface.panel_width())
    }

    pub fn on_pointer_leave(&mut self) -> HoverState {
        trace!("pointer left panel");
        self.hover = self.hover.on_pointer_leave();
        self.hover
    }

    pub fn handle(&mut self, event: PointerEvent) -> HoverState {
        match event {
            PointerEvent::Move { offset, width } => self.on_pointer_move(offset, width),
            PointerEvent::Leave => self.on_pointer_leave(),
        }
    }

    pub fn compose(&self) -> ComposeOutcome {
        compose(&self.series, &self.options, &self.config, self.hover)
    }
}
