//! Drag Ghost
//!
//! Floating drag image that tracks the pointer while a drag is active.
//! Pointer events pass through it (`pointer-events: none` in the style)
//! so hit-testing still reaches the zones underneath.

use board_dnd::DragSignals;
use leptos::prelude::*;

#[component]
pub fn DragGhost(dnd: DragSignals) -> impl IntoView {
    let style = move || {
        let (x, y) = dnd.ghost_pos.get();
        format!("position: fixed; pointer-events: none; left: {}px; top: {}px;", x + 10, y + 10)
    };

    view! {
        <Show when=move || dnd.is_dragging()>
            <div class="drag-ghost" style=style>
                {move || dnd.ghost_label.get()}
            </div>
        </Show>
    }
}
