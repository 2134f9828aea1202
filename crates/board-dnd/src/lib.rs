//! Board DragDrop
//!
//! Drag-and-drop for the board UI using pointer events, so mouse and touch
//! share one code path. Uses a movement threshold to distinguish click from
//! drag, and press-and-hold on touch to distinguish drag from scrolling.
//!
//! The drag itself is a small state machine ([`DragSession`]) kept free of
//! DOM types; the pointer glue translates raw pointer events into its
//! arm/move/enter/leave/release vocabulary.

mod pointer;
mod session;
mod signals;

pub use pointer::{
    bind_global_pointer_handlers, make_on_pointerdown, make_on_zone_pointerout,
    make_on_zone_pointerover,
};
pub use session::{
    DragIntent, DragItem, DragPhase, DragSession, DropTarget, DRAG_THRESHOLD_PX, TOUCH_HOLD_MS,
};
pub use signals::{create_drag_signals, DragSignals};
