// File: crates/swingchart-core/src/view.rs
// Hover state machine: Idle or Active(index), driven only by pointer events.

use serde::Serialize;

use crate::pointer::{resolve_index, PointerEvent};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "index", rename_all = "lowercase")]
pub enum HoverState {
    #[default]
    Idle,
    Active(usize),
}

impl HoverState {
    pub fn index(&self) -> Option<usize> {
        match *self {
            HoverState::Idle => None,
            HoverState::Active(i) => Some(i),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, HoverState::Active(_))
    }

    /// Next state for a pointer move over `len` chartable points. Offsets that
    /// do not resolve leave the state as it was.
    pub fn on_pointer_move(self, offset: f64, width: f64, len: usize) -> Self {
        match resolve_index(offset, width, len) {
            Some(i) => HoverState::Active(i),
            None => self,
        }
    }

    pub fn on_pointer_leave(self) -> Self {
        HoverState::Idle
    }

    pub fn apply(self, event: PointerEvent, len: usize) -> Self {
        match event {
            PointerEvent::Move { offset, width } => self.on_pointer_move(offset, width, len),
            PointerEvent::Leave => self.on_pointer_leave(),
        }
    }
}
