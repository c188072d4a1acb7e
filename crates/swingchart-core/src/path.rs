// File: crates/swingchart-core/src/path.rs
// Summary: Price line, area fill and gap-aware indicator paths in panel pixels.

use std::fmt::Write as _;

use serde::Serialize;

use crate::filter::ChartPoint;
use crate::geometry::Point;
use crate::scale::ChartGeometry;
use crate::series::Indicator;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// A renderer-agnostic vector path.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Path {
    pub commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Point) {
        self.commands.push(PathCommand::MoveTo(p));
    }

    pub fn line_to(&mut self, p: Point) {
        self.commands.push(PathCommand::LineTo(p));
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of disjoint sub-paths (one per move-to).
    pub fn segment_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, PathCommand::MoveTo(_))).count()
    }

    /// Sub-paths as point lists, split at every move-to.
    pub fn segments(&self) -> Vec<Vec<Point>> {
        let mut out: Vec<Vec<Point>> = Vec::new();
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => out.push(vec![p]),
                PathCommand::LineTo(p) => match out.last_mut() {
                    Some(seg) => seg.push(p),
                    None => out.push(vec![p]),
                },
                PathCommand::Close => {}
            }
        }
        out
    }

    /// SVG path data, e.g. `M0,10L5,3Z`.
    pub fn to_svg(&self) -> String {
        let mut d = String::new();
        for cmd in &self.commands {
            // Writing into a String cannot fail.
            let _ = match cmd {
                PathCommand::MoveTo(p) => write!(d, "M{},{}", p.x, p.y),
                PathCommand::LineTo(p) => write!(d, "L{},{}", p.x, p.y),
                PathCommand::Close => write!(d, "Z"),
            };
        }
        d
    }
}

/// One continuous polyline through every rendered close.
pub fn line_path(rendered: &[Point]) -> Path {
    let mut path = Path::new();
    let mut iter = rendered.iter();
    if let Some(first) = iter.next() {
        path.move_to(*first);
        for p in iter {
            path.line_to(*p);
        }
    }
    path
}

/// The line path dropped to the price baseline at both ends and closed.
pub fn area_path(rendered: &[Point], baseline: f64) -> Path {
    let mut path = line_path(rendered);
    if let (Some(first), Some(last)) = (rendered.first(), rendered.last()) {
        path.line_to(Point::new(last.x, baseline));
        path.line_to(Point::new(first.x, baseline));
        path.close();
    }
    path
}

/// Walk the series and restart the polyline after every undefined value.
/// Returns `None` when the indicator has no defined value at all.
pub fn indicator_path(points: &[ChartPoint<'_>], key: Indicator, geometry: &ChartGeometry) -> Option<Path> {
    let mut path = Path::new();
    let mut started = false;
    for (i, p) in points.iter().enumerate() {
        match p.point.indicator(key) {
            Some(v) => {
                let at = Point::new(geometry.x.to_px(i), geometry.price.to_px(v));
                if started {
                    path.line_to(at);
                } else {
                    path.move_to(at);
                    started = true;
                }
            }
            None => started = false,
        }
    }
    if path.is_empty() { None } else { Some(path) }
}

/// Dash pattern in pixels: `on` drawn, `off` skipped.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DashPattern {
    pub on: f64,
    pub off: f64,
}

impl DashPattern {
    pub const fn for_indicator(key: Indicator) -> Self {
        match key {
            Indicator::Ma5 | Indicator::Ma25 => Self { on: 4.0, off: 2.0 },
            Indicator::Ma75 => Self { on: 8.0, off: 4.0 },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IndicatorPath {
    pub indicator: Indicator,
    pub dash: DashPattern,
    pub path: Path,
}
