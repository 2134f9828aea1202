//! DnD state signals
//!
//! One `DragSignals` per page session, created by the board root and passed
//! down to the components that take part in dragging.

use leptos::prelude::*;

use crate::session::{DragItem, DragSession};

/// Pending touch press waiting out the hold delay
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PendingTouch {
    pub item: DragItem,
    pub label: String,
    pub x: i32,
    pub y: i32,
    /// Invalidates the hold timer when the press ends or moves
    pub epoch: u32,
}

/// Drag state shared across the board
#[derive(Clone, Copy)]
pub struct DragSignals {
    pub session: RwSignal<DragSession>,
    /// Pointer position the floating ghost tracks
    pub ghost_pos: RwSignal<(i32, i32)>,
    /// Text shown inside the ghost
    pub ghost_label: RwSignal<String>,
    /// Set briefly after a drag completes, so the click event that follows
    /// the final pointerup is not mistaken for a real click
    pub drag_just_ended: RwSignal<bool>,
    pub(crate) pending_touch: RwSignal<Option<PendingTouch>>,
    pub(crate) touch_epoch: StoredValue<u32>,
}

pub fn create_drag_signals() -> DragSignals {
    DragSignals {
        session: RwSignal::new(DragSession::new()),
        ghost_pos: RwSignal::new((0, 0)),
        ghost_label: RwSignal::new(String::new()),
        drag_just_ended: RwSignal::new(false),
        pending_touch: RwSignal::new(None),
        touch_epoch: StoredValue::new(0),
    }
}

impl DragSignals {
    pub fn is_dragging(&self) -> bool {
        self.session.get().is_dragging()
    }

    pub fn dragging_item(&self) -> Option<DragItem> {
        self.session.get().dragging_item()
    }

    pub fn trash_enabled(&self) -> bool {
        self.session.get().trash_enabled()
    }

    pub(crate) fn next_touch_epoch(&self) -> u32 {
        let next = self.touch_epoch.with_value(|e| e.wrapping_add(1));
        self.touch_epoch.set_value(next);
        next
    }
}
