//! Card Tile Component
//!
//! The face of a card inside its list column: label chips, optional cover
//! image, title, lock icon. The tile is rebuilt whole whenever its card
//! changes (the list keys items on the full card value), so handlers and
//! derived visuals always match the data they were built from.

use board_dnd::{make_on_pointerdown, DragItem, DragSignals};
use leptos::prelude::*;

use crate::context::{use_session, EntityKind};
use crate::labels;
use crate::models::Card;
use crate::store::BoardStateStoreFields;

use super::LazyImage;

#[component]
pub fn CardTile(card: Card, dnd: DragSignals) -> impl IntoView {
    let session = use_session();
    let id = card.id;
    let item = DragItem::Card { id, from_list: card.cardlist_id };
    let on_pointerdown = make_on_pointerdown(dnd, item, card.title.clone());

    let mask = card.label_mask;
    let chips = move || {
        session.store.labels().with(|slots| {
            labels::visible_labels(mask, slots)
                .into_iter()
                .map(|l| (l.index, l.name.clone(), l.color.clone()))
                .collect::<Vec<_>>()
        })
    };

    let is_drag_source = move || dnd.dragging_item() == Some(item);
    let deleting = move || session.inflight.active(EntityKind::Card, id);

    let tile_class = move || {
        let mut c = String::from("card-tile");
        if is_drag_source() {
            c.push_str(" drag-source");
        }
        if deleting() {
            c.push_str(" deleting");
        }
        c
    };

    let open = move |_| {
        if dnd.drag_just_ended.get_untracked() {
            return;
        }
        session.open_card.set(Some(id));
    };

    view! {
        <div class=tile_class on:pointerdown=on_pointerdown on:click=open>
            <div class="card-labels">
                <For
                    each=chips
                    key=|(index, name, color)| (*index, name.clone(), color.clone())
                    children=move |(_, name, color)| {
                        view! {
                            <span
                                class="card-label"
                                style=format!("background: {color}")
                                title=name
                            />
                        }
                    }
                />
            </div>
            {card.cover_image.clone().map(|src| {
                view! { <LazyImage src=src class="card-cover" alt="cover" /> }
            })}
            <div class="card-title">
                {card.locked.then(|| view! { <span class="lock-icon" title="Locked">"🔒"</span> })}
                {card.title.clone()}
            </div>
        </div>
    }
}
