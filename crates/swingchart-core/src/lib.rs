// File: crates/swingchart-core/src/lib.rs
// Summary: Core library entry point; exports the chart geometry and hover API.

pub mod aggregate;
pub mod chart;
pub mod config;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod grid;
pub mod path;
pub mod pointer;
pub mod prepare;
pub mod scale;
pub mod series;
pub mod tooltip;
pub mod types;
pub mod view;
pub mod volume;

pub use aggregate::aggregate;
pub use chart::{compose, ChartComposer, ComposeOutcome, Crosshair, Scene};
pub use config::ChartConfig;
pub use error::{ChartError, ChartResult};
pub use filter::{chartable, ChartPoint};
pub use path::{DashPattern, IndicatorPath, Path, PathCommand};
pub use pointer::{resolve_index, FixedPointer, PointerEvent, PointerSurface};
pub use prepare::normalize_quotes;
pub use scale::ChartGeometry;
pub use series::{parse_series, read_series, Indicator, Interval, TimeSeriesPoint};
pub use tooltip::{Tooltip, TooltipField, NO_VALUE};
pub use types::DisplayOptions;
pub use view::HoverState;
pub use volume::VolumeBar;
