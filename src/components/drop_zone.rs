//! Drop Zone Component
//!
//! A slot between cards (or lists) that accepts drops. Each zone carries
//! the id of the element immediately above it, so a drop computes its new
//! previous-id without measuring the DOM. The `data-drop` attribute lets
//! the touch path find zones by hit-testing.

use board_dnd::{make_on_zone_pointerout, make_on_zone_pointerover, DragItem, DragSignals, DropTarget};
use leptos::prelude::*;

#[component]
pub fn DropZone(dnd: DragSignals, target: DropTarget) -> impl IntoView {
    let on_pointerover = make_on_zone_pointerover(dnd, target);
    let on_pointerout = make_on_zone_pointerout(dnd, target);

    // a zone is only eligible for the matching drag kind
    let eligible = move || match dnd.dragging_item() {
        Some(DragItem::Card { .. }) => matches!(target, DropTarget::CardSlot { .. }),
        Some(DragItem::List(_)) => matches!(target, DropTarget::ListSlot { .. }),
        None => false,
    };
    let is_active = move || dnd.session.get().hover_target() == Some(target);

    let zone_class = move || {
        let mut c = String::from(match target {
            DropTarget::CardSlot { .. } => "drop-zone card-slot",
            DropTarget::ListSlot { .. } => "drop-zone list-slot",
            DropTarget::Trash => "drop-zone",
        });
        if !eligible() {
            c.push_str(" hidden");
        }
        if is_active() {
            c.push_str(" active");
        }
        c
    };

    view! {
        <div
            class=zone_class
            data-drop=target.encode()
            on:pointerover=on_pointerover
            on:pointerout=on_pointerout
        />
    }
}
