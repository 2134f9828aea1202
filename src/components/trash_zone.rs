//! Trash Zone
//!
//! Board-level drop-to-delete affordance, enabled from the moment a drag
//! is armed.

use board_dnd::{make_on_zone_pointerout, make_on_zone_pointerover, DragSignals, DropTarget};
use leptos::prelude::*;

#[component]
pub fn TrashZone(dnd: DragSignals) -> impl IntoView {
    let on_pointerover = make_on_zone_pointerover(dnd, DropTarget::Trash);
    let on_pointerout = make_on_zone_pointerout(dnd, DropTarget::Trash);

    let zone_class = move || {
        let mut c = String::from("trash-zone");
        if !dnd.trash_enabled() {
            c.push_str(" hidden");
        }
        if dnd.session.get().hover_target() == Some(DropTarget::Trash) {
            c.push_str(" active");
        }
        c
    };

    view! {
        <div
            class=zone_class
            data-drop="trash"
            on:pointerover=on_pointerover
            on:pointerout=on_pointerout
        >
            "Drop here to delete"
        </div>
    }
}
