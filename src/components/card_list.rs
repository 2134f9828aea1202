//! Card List Column
//!
//! One list on the board: header (drag handle, rename, delete), the cards
//! in linked order with a drop slot before each position, and the add-card
//! composer at the bottom.

use board_dnd::{make_on_pointerdown, DragItem, DragSignals, DropTarget};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_session, EntityKind};
use crate::models::CardList;
use crate::store;
use crate::store::BoardStateStoreFields;
use crate::sync;

use super::{CardTile, DeleteConfirmButton, DropZone};

#[component]
pub fn CardListColumn(list: CardList, dnd: DragSignals) -> impl IntoView {
    let session = use_session();
    let list_id = list.id;
    let item = DragItem::List(list_id);
    let on_pointerdown = make_on_pointerdown(dnd, item, list.name.clone());

    let cards = move || session.store.cards().with(|cards| store::cards_in_order(cards, list_id));
    let head_slot = DropTarget::CardSlot { list_id, prev_card_id: 0 };

    let is_drag_source = move || dnd.dragging_item() == Some(item);
    let deleting = Signal::derive(move || session.inflight.active(EntityKind::List, list_id));

    let column_class = move || {
        let mut c = String::from("card-list");
        if is_drag_source() {
            c.push_str(" drag-source");
        }
        c
    };

    let on_rename = move |ev: web_sys::FocusEvent| {
        let name = event_target_value(&ev).trim().to_string();
        if name.is_empty() {
            return;
        }
        spawn_local(sync::rename_list(session, list_id, name));
    };

    view! {
        <div class=column_class>
            <div class="list-header" on:pointerdown=on_pointerdown>
                <input
                    class="list-name"
                    prop:value=list.name.clone()
                    on:blur=on_rename
                />
                <DeleteConfirmButton
                    button_class="list-delete-btn"
                    disabled=deleting
                    on_confirm=Callback::new(move |_| {
                        spawn_local(sync::delete_list(session, list_id));
                    })
                />
            </div>
            <div class="list-cards">
                <DropZone dnd=dnd target=head_slot />
                <For
                    each=cards
                    key=|card| card.clone()
                    children=move |card| {
                        let slot_below = DropTarget::CardSlot { list_id, prev_card_id: card.id };
                        view! {
                            <CardTile card=card dnd=dnd />
                            <DropZone dnd=dnd target=slot_below />
                        }
                    }
                />
            </div>
            <AddCardComposer list_id=list_id />
        </div>
    }
}

/// Inline form appending a card at the tail of its list
#[component]
fn AddCardComposer(list_id: u32) -> impl IntoView {
    let session = use_session();
    let (title, set_title) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let submit = move || {
        let text = title.get_untracked().trim().to_string();
        if text.is_empty() || busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            sync::add_card(session, list_id, text).await;
            set_title.set(String::new());
            set_busy.set(false);
        });
    };

    view! {
        <form
            class="add-card"
            on:submit=move |ev| {
                ev.prevent_default();
                submit();
            }
        >
            <input
                class="add-card-input"
                placeholder="Add a card…"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || busy.get()>"Add"</button>
        </form>
    }
}
