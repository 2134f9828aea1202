//! Board Component
//!
//! The list columns in linked order, a drop slot before each position, and
//! the add-list form at the end.

use board_dnd::{DragSignals, DropTarget};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_session;
use crate::store;
use crate::store::BoardStateStoreFields;
use crate::sync;

use super::{CardListColumn, DropZone};

#[component]
pub fn Board(dnd: DragSignals) -> impl IntoView {
    let session = use_session();
    let lists = move || session.store.lists().with(|lists| store::lists_in_order(lists));
    let head_slot = DropTarget::ListSlot { prev_list_id: 0 };

    view! {
        <div class="board">
            <DropZone dnd=dnd target=head_slot />
            <For
                each=lists
                key=|list| list.clone()
                children=move |list| {
                    let slot_after = DropTarget::ListSlot { prev_list_id: list.id };
                    view! {
                        <CardListColumn list=list dnd=dnd />
                        <DropZone dnd=dnd target=slot_after />
                    }
                }
            />
            <AddListForm />
        </div>
    }
}

/// Inline form appending a list at the tail of the board
#[component]
fn AddListForm() -> impl IntoView {
    let session = use_session();
    let (name, set_name) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let submit = move || {
        let text = name.get_untracked().trim().to_string();
        if text.is_empty() || busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            sync::add_list(session, text).await;
            set_name.set(String::new());
            set_busy.set(false);
        });
    };

    view! {
        <form
            class="add-list"
            on:submit=move |ev| {
                ev.prevent_default();
                submit();
            }
        >
            <input
                class="add-list-input"
                placeholder="Add a list…"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || busy.get()>"Add list"</button>
        </form>
    }
}
