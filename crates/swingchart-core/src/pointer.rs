// File: crates/swingchart-core/src/pointer.rs
// Summary: Pointer offset to data index resolution, behind a surface capability trait.

use crate::geometry::clamp;

/// What the resolver needs to know about the surface the chart is drawn on.
/// Implemented by windowing glue; tests use [`FixedPointer`].
pub trait PointerSurface {
    /// Horizontal pointer position relative to the panel's left edge, in the
    /// panel's rendered pixels.
    fn pointer_offset(&self) -> f64;
    /// Rendered panel width, which may differ from the design width.
    fn panel_width(&self) -> f64;
}

/// A pointer sample captured from an event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedPointer {
    pub offset: f64,
    pub width: f64,
}

impl PointerSurface for FixedPointer {
    fn pointer_offset(&self) -> f64 { self.offset }
    fn panel_width(&self) -> f64 { self.width }
}

/// Pointer input delivered to the composer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Move { offset: f64, width: f64 },
    Leave,
}

/// Nearest data index for `offset` in a panel `width` pixels wide showing `len`
/// points. `None` when the offset is outside `[0, width]`, the width is not
/// positive, or there is nothing to select.
pub fn resolve_index(offset: f64, width: f64, len: usize) -> Option<usize> {
    if len == 0 || !(width > 0.0) || !(0.0..=width).contains(&offset) {
        return None;
    }
    if len == 1 {
        return Some(0);
    }
    let last = len - 1;
    // offset >= 0 here, so round-half-away-from-zero is round-half-up.
    let idx = (offset / width * last as f64).round();
    Some(clamp(idx, 0.0, last as f64) as usize)
}

pub fn resolve_from<S: PointerSurface + ?Sized>(surface: &S, len: usize) -> Option<usize> {
    resolve_index(surface.pointer_offset(), surface.panel_width(), len)
}
