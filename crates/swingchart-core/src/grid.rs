// File: crates/swingchart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

use serde::Serialize;

use crate::geometry::Point;

/// `steps` evenly spaced values from `start` to `end` inclusive. A single step is just `start`.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => return Vec::new(),
        1 => return vec![start],
        _ => {}
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GridOrientation {
    Vertical,
    Horizontal,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GridLine {
    pub orientation: GridOrientation,
    pub from: Point,
    pub to: Point,
}

/// Exactly `vertical` lines across the width and `horizontal` lines down the
/// height. With two or more lines per direction both panel edges are included.
pub fn gridlines(width: f64, height: f64, vertical: usize, horizontal: usize) -> Vec<GridLine> {
    let mut out = Vec::with_capacity(vertical + horizontal);
    for x in linspace(0.0, width, vertical) {
        out.push(GridLine {
            orientation: GridOrientation::Vertical,
            from: Point::new(x, 0.0),
            to: Point::new(x, height),
        });
    }
    for y in linspace(0.0, height, horizontal) {
        out.push(GridLine {
            orientation: GridOrientation::Horizontal,
            from: Point::new(0.0, y),
            to: Point::new(width, y),
        });
    }
    out
}
