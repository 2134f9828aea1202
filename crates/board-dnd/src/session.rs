//! Drag session state machine
//!
//! idle -> armed -> dragging -> released/cancelled -> idle, with no DOM
//! types involved so the transitions can be tested natively.

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// Press-and-hold delay before a touch pointer arms a drag
pub const TOUCH_HOLD_MS: u32 = 350;

/// What is being dragged
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragItem {
    List(u32),
    Card { id: u32, from_list: u32 },
}

/// Where the pointer currently hovers. Slot targets carry the id of the
/// element immediately above the drop point (0 = head of the sequence).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget {
    ListSlot { prev_list_id: u32 },
    CardSlot { list_id: u32, prev_card_id: u32 },
    Trash,
}

impl DropTarget {
    /// Encode for a `data-drop` attribute (touch hit-testing reads it back).
    pub fn encode(&self) -> String {
        match self {
            DropTarget::ListSlot { prev_list_id } => format!("list:{prev_list_id}"),
            DropTarget::CardSlot { list_id, prev_card_id } => {
                format!("card:{list_id}:{prev_card_id}")
            }
            DropTarget::Trash => "trash".to_string(),
        }
    }

    pub fn decode(s: &str) -> Option<DropTarget> {
        if s == "trash" {
            return Some(DropTarget::Trash);
        }
        let mut parts = s.split(':');
        match parts.next()? {
            "list" => Some(DropTarget::ListSlot { prev_list_id: parts.next()?.parse().ok()? }),
            "card" => Some(DropTarget::CardSlot {
                list_id: parts.next()?.parse().ok()?,
                prev_card_id: parts.next()?.parse().ok()?,
            }),
            _ => None,
        }
    }
}

/// The intent a completed drag resolves to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragIntent {
    Move { item: DragItem, target: DropTarget },
    Delete(DragItem),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    /// Pointer is down on a draggable, not yet past the movement threshold.
    Armed { item: DragItem, origin: (i32, i32) },
    Dragging { item: DragItem, over: Option<DropTarget> },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragSession {
    phase: DragPhase,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    pub fn dragging_item(&self) -> Option<DragItem> {
        match self.phase {
            DragPhase::Dragging { item, .. } => Some(item),
            _ => None,
        }
    }

    /// The trash zone is enabled from the moment a drag is armed.
    pub fn trash_enabled(&self) -> bool {
        !matches!(self.phase, DragPhase::Idle)
    }

    pub fn hover_target(&self) -> Option<DropTarget> {
        match self.phase {
            DragPhase::Dragging { over, .. } => over,
            _ => None,
        }
    }

    /// Pointer down on a draggable. Ignored unless idle.
    pub fn arm(&mut self, item: DragItem, x: i32, y: i32) {
        if matches!(self.phase, DragPhase::Idle) {
            self.phase = DragPhase::Armed { item, origin: (x, y) };
        }
    }

    /// Pointer movement. Returns true on the armed -> dragging transition.
    pub fn pointer_moved(&mut self, x: i32, y: i32) -> bool {
        if let DragPhase::Armed { item, origin } = self.phase {
            let dx = (x - origin.0).abs();
            let dy = (y - origin.1).abs();
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                self.phase = DragPhase::Dragging { item, over: None };
                return true;
            }
        }
        false
    }

    /// Pointer entered a drop zone.
    pub fn enter(&mut self, target: DropTarget) {
        if let DragPhase::Dragging { item, .. } = self.phase {
            self.phase = DragPhase::Dragging { item, over: Some(target) };
        }
    }

    /// Pointer left a drop zone. A leave whose related target is still
    /// inside the zone is not a boundary exit and must not clear the hover;
    /// a leave for a zone we are no longer over is ignored.
    pub fn leave(&mut self, target: DropTarget, boundary_exit: bool) {
        if !boundary_exit {
            return;
        }
        if let DragPhase::Dragging { item, over: Some(current) } = self.phase {
            if current == target {
                self.phase = DragPhase::Dragging { item, over: None };
            }
        }
    }

    /// Set the hover directly (touch hit-testing path).
    pub fn hover(&mut self, target: Option<DropTarget>) {
        if let DragPhase::Dragging { item, .. } = self.phase {
            self.phase = DragPhase::Dragging { item, over: target };
        }
    }

    /// Pointer up. A drag over a valid target yields an intent; an armed
    /// press that never crossed the threshold is a click and yields none.
    /// Always returns to idle.
    pub fn release(&mut self) -> Option<DragIntent> {
        let intent = match self.phase {
            DragPhase::Dragging { item, over: Some(DropTarget::Trash) } => {
                Some(DragIntent::Delete(item))
            }
            DragPhase::Dragging { item, over: Some(target) } => {
                Some(DragIntent::Move { item, target })
            }
            _ => None,
        };
        self.phase = DragPhase::Idle;
        intent
    }

    /// Abort (escape key, pointercancel, drop on a non-target).
    pub fn cancel(&mut self) {
        self.phase = DragPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: DragItem = DragItem::Card { id: 10, from_list: 3 };
    const SLOT: DropTarget = DropTarget::CardSlot { list_id: 4, prev_card_id: 7 };

    fn dragging_session() -> DragSession {
        let mut s = DragSession::new();
        s.arm(CARD, 100, 100);
        assert!(s.pointer_moved(100 + DRAG_THRESHOLD_PX + 1, 100));
        s
    }

    #[test]
    fn click_within_threshold_yields_no_intent() {
        let mut s = DragSession::new();
        s.arm(CARD, 100, 100);
        assert!(!s.pointer_moved(102, 103));
        assert!(!s.is_dragging());
        assert_eq!(s.release(), None);
        assert_eq!(s.phase(), DragPhase::Idle);
    }

    #[test]
    fn threshold_crossing_starts_drag() {
        let s = dragging_session();
        assert!(s.is_dragging());
        assert_eq!(s.dragging_item(), Some(CARD));
        assert_eq!(s.hover_target(), None);
    }

    #[test]
    fn arming_enables_trash_zone() {
        let mut s = DragSession::new();
        assert!(!s.trash_enabled());
        s.arm(CARD, 0, 0);
        assert!(s.trash_enabled());
        s.release();
        assert!(!s.trash_enabled());
    }

    #[test]
    fn drop_on_slot_emits_move_intent() {
        let mut s = dragging_session();
        s.enter(SLOT);
        assert_eq!(s.release(), Some(DragIntent::Move { item: CARD, target: SLOT }));
        assert_eq!(s.phase(), DragPhase::Idle);
    }

    #[test]
    fn drop_on_trash_emits_delete_intent() {
        let mut s = dragging_session();
        s.enter(DropTarget::Trash);
        assert_eq!(s.release(), Some(DragIntent::Delete(CARD)));
    }

    #[test]
    fn drop_off_target_yields_nothing() {
        let mut s = dragging_session();
        s.enter(SLOT);
        s.leave(SLOT, true);
        assert_eq!(s.release(), None);
    }

    #[test]
    fn leave_into_contained_child_is_suppressed() {
        let mut s = dragging_session();
        s.enter(SLOT);
        // related target still inside the zone: not a boundary exit
        s.leave(SLOT, false);
        assert_eq!(s.hover_target(), Some(SLOT));
        // true boundary exit clears it
        s.leave(SLOT, true);
        assert_eq!(s.hover_target(), None);
    }

    #[test]
    fn stale_leave_for_other_zone_is_ignored() {
        let other = DropTarget::CardSlot { list_id: 4, prev_card_id: 9 };
        let mut s = dragging_session();
        s.enter(SLOT);
        s.leave(other, true);
        assert_eq!(s.hover_target(), Some(SLOT));
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut s = dragging_session();
        s.enter(SLOT);
        s.cancel();
        assert_eq!(s.phase(), DragPhase::Idle);
        assert_eq!(s.release(), None);
    }

    #[test]
    fn enter_before_threshold_is_ignored() {
        let mut s = DragSession::new();
        s.arm(CARD, 0, 0);
        s.enter(SLOT);
        assert_eq!(s.hover_target(), None);
    }

    #[test]
    fn drop_target_attribute_round_trip() {
        for t in [
            DropTarget::ListSlot { prev_list_id: 0 },
            DropTarget::ListSlot { prev_list_id: 12 },
            DropTarget::CardSlot { list_id: 4, prev_card_id: 7 },
            DropTarget::Trash,
        ] {
            assert_eq!(DropTarget::decode(&t.encode()), Some(t));
        }
        assert_eq!(DropTarget::decode("bogus:1"), None);
        assert_eq!(DropTarget::decode("card:4"), None);
    }
}
