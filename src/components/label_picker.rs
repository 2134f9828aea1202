//! Label Picker
//!
//! Label slots for the open card: each non-deleted slot is selectable,
//! shows its active state against the card's mask, and can be renamed,
//! recolored, or deleted. Deleting a slot clears its bit from every card
//! on the board.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_session, EntityKind};
use crate::labels;
use crate::models::Label;
use crate::store::BoardStateStoreFields;
use crate::sync;

use super::DeleteConfirmButton;

#[component]
pub fn LabelPicker(card_id: u32) -> impl IntoView {
    let session = use_session();

    let slots = move || {
        session
            .store
            .labels()
            .with(|labels| labels.iter().filter(|l| !l.is_deleted()).cloned().collect::<Vec<_>>())
    };
    let mask = move || {
        session.store.cards().with(|cards| {
            cards.iter().find(|c| c.id == card_id).map(|c| c.label_mask).unwrap_or(0)
        })
    };

    view! {
        <div class="label-picker">
            <For
                each=slots
                key=|label| label.clone()
                children=move |label| {
                    view! { <LabelRow card_id=card_id label=label mask=Signal::derive(mask) /> }
                }
            />
            <NewLabelForm />
        </div>
    }
}

#[component]
fn LabelRow(card_id: u32, label: Label, mask: Signal<u32>) -> impl IntoView {
    let session = use_session();
    let index = label.index;
    let color = label.color.clone();

    let active = move || labels::has_label(mask.get(), index);
    let deleting =
        Signal::derive(move || session.inflight.active(EntityKind::Label, u32::from(index)));

    let toggle = move |_| {
        let value = !labels::has_label(mask.get_untracked(), index);
        spawn_local(sync::set_card_label(session, card_id, index, value));
    };

    let edit_color = label.color.clone();
    let on_name_blur = move |ev: web_sys::FocusEvent| {
        let name = event_target_value(&ev).trim().to_string();
        if name.is_empty() {
            return;
        }
        spawn_local(sync::update_label(session, index, name, edit_color.clone()));
    };
    let edit_name = label.name.clone();
    let on_color_change = move |ev: web_sys::Event| {
        let color = event_target_value(&ev);
        spawn_local(sync::update_label(session, index, edit_name.clone(), color));
    };

    view! {
        <div class=move || {
            if active() { "label-row selectable active" } else { "label-row selectable" }
        }>
            <button
                class="label-swatch"
                style=format!("background: {color}")
                on:click=toggle
            >
                <Show when=active>"✓"</Show>
            </button>
            <input class="label-name" prop:value=label.name.clone() on:blur=on_name_blur />
            <input
                class="label-color"
                type="color"
                prop:value=label.color.clone()
                on:change=on_color_change
            />
            <DeleteConfirmButton
                button_class="label-delete-btn"
                disabled=deleting
                on_confirm=Callback::new(move |_| {
                    spawn_local(sync::delete_label(session, index));
                })
            />
        </div>
    }
}

#[component]
fn NewLabelForm() -> impl IntoView {
    let session = use_session();
    let (name, set_name) = signal(String::new());
    let (color, set_color) = signal("#61bd4f".to_string());

    let submit = move || {
        let text = name.get_untracked().trim().to_string();
        if text.is_empty() {
            return;
        }
        spawn_local(sync::create_label(session, text, color.get_untracked()));
        set_name.set(String::new());
    };

    view! {
        <form
            class="new-label"
            on:submit=move |ev| {
                ev.prevent_default();
                submit();
            }
        >
            <input
                class="new-label-name"
                placeholder="New label…"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                class="new-label-color"
                type="color"
                prop:value=move || color.get()
                on:input=move |ev| set_color.set(event_target_value(&ev))
            />
            <button type="submit">"Add label"</button>
        </form>
    }
}
