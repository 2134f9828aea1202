//! Open Card Dialog
//!
//! Full card view: title edit, content with markup transcoding, labels,
//! attachments, lock toggle. Opening fetches the authoritative card
//! (offline falls back to the open-card cache); title and content edits
//! diff against the cache so unchanged values never cost a round trip.
//!
//! Content has two modes. View mode renders the markup read-only but keeps
//! its checkboxes live: toggling one syncs immediately, no blur needed.
//! Clicking anywhere else enters edit mode, which transcodes the markup
//! into contenteditable HTML and transcodes back on blur, after copying
//! each checkbox's live state into its serialized attribute.

use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::{use_session, EntityKind};
use crate::markup;
use crate::models::{Attachment, Card};
use crate::store::BoardStateStoreFields;
use crate::sync;

use super::{AttachmentList, DeleteConfirmButton, LabelPicker};

#[component]
pub fn OpenCardDialog() -> impl IntoView {
    let session = use_session();
    // fallback snapshot for cards served from cache while offline
    let opened = RwSignal::new(None::<Card>);
    let attachments = RwSignal::new(Vec::<Attachment>::new());
    let editing = RwSignal::new(false);
    let view_ref = NodeRef::<Div>::new();
    let edit_ref = NodeRef::<Div>::new();

    // fetch card + attachments whenever a card opens
    Effect::new(move |_| {
        editing.set(false);
        match session.open_card.get() {
            Some(id) => {
                spawn_local(async move {
                    match sync::open_card(session, id).await {
                        Some(card) => {
                            opened.set(Some(card));
                            attachments.set(sync::load_attachments(session, id).await);
                        }
                        None => session.open_card.set(None),
                    }
                });
            }
            None => {
                opened.set(None);
                attachments.set(Vec::new());
            }
        }
    });

    let current = move || -> Option<Card> {
        let id = session.open_card.get()?;
        session
            .store
            .cards()
            .with(|cards| cards.iter().find(|c| c.id == id).cloned())
            .or_else(|| opened.get())
    };
    let current_untracked = move || -> Option<Card> {
        let id = session.open_card.get_untracked()?;
        session
            .store
            .cards()
            .with_untracked(|cards| cards.iter().find(|c| c.id == id).cloned())
            .or_else(|| opened.get_untracked())
    };

    // populate the editor once per entry into edit mode
    Effect::new(move |_| {
        if !editing.get() {
            return;
        }
        let Some(el) = edit_ref.get() else { return };
        if let Some(card) = current_untracked() {
            el.set_inner_html(&markup::markup_to_editable(&card.content));
            let _ = el.focus();
        }
    });

    let serialize_editor = move || -> Option<String> {
        let el = edit_ref.get_untracked()?;
        markup::sync_checkbox_attrs(&el);
        Some(markup::editable_to_markup(&el.inner_html()))
    };

    let on_title_blur = move |ev: web_sys::FocusEvent| {
        let Some(card) = current_untracked() else { return };
        let title = event_target_value(&ev).trim().to_string();
        if title.is_empty() {
            return;
        }
        spawn_local(sync::update_card_title(session, card.id, title));
    };

    let enter_edit = move |ev: web_sys::MouseEvent| {
        // checkbox clicks toggle; they do not open the editor
        if let Some(el) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
            if el.tag_name().eq_ignore_ascii_case("input") {
                return;
            }
        }
        let Some(card) = current_untracked() else { return };
        if card.locked {
            return;
        }
        editing.set(true);
    };

    let on_view_change = move |ev: web_sys::Event| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        if !target.tag_name().eq_ignore_ascii_case("input") {
            return;
        }
        let Some(root) = view_ref.get_untracked() else { return };
        let Some(nth) = markup::checkbox_index_of(&root, &target) else { return };
        let Some(card) = current_untracked() else { return };
        if let Some(content) = markup::toggle_checkbox(&card.content, nth) {
            spawn_local(sync::update_card_content(session, card.id, content));
        }
    };

    let on_editor_blur = move |_ev: web_sys::FocusEvent| {
        let Some(content) = serialize_editor() else { return };
        editing.set(false);
        if let Some(card) = current_untracked() {
            spawn_local(sync::update_card_content(session, card.id, content));
        }
    };

    // a checkbox toggled inside the editor syncs without waiting for blur
    let on_editor_change = move |_ev: web_sys::Event| {
        let Some(content) = serialize_editor() else { return };
        if let Some(card) = current_untracked() {
            spawn_local(sync::update_card_content(session, card.id, content));
        }
    };

    let toggle_lock = move |_ev: web_sys::MouseEvent| {
        if let Some(card) = current_untracked() {
            spawn_local(sync::set_card_lock(session, card.id, !card.locked));
        }
    };

    view! {
        <Show when=move || session.open_card.get().is_some()>
            <div class="dialog-overlay" on:click=move |_| session.open_card.set(None)>
                <div class="open-card-dialog" on:click=move |ev| ev.stop_propagation()>
                    {move || {
                        current()
                            .map(|card| {
                                let card_id = card.id;
                                let deleting = Signal::derive(move || {
                                    session.inflight.active(EntityKind::Card, card_id)
                                });
                                let content = card.content.clone();
                                let lock_title = if card.locked { "Unlock" } else { "Lock" };
                                let lock_icon = if card.locked { "🔒" } else { "🔓" };
                                view! {
                                    <div class="dialog-header">
                                        <input
                                            class="card-title-input"
                                            prop:value=card.title.clone()
                                            disabled=card.locked
                                            on:blur=on_title_blur
                                        />
                                        <button
                                            class="lock-btn"
                                            title=lock_title
                                            on:click=toggle_lock
                                        >
                                            {lock_icon}
                                        </button>
                                        <DeleteConfirmButton
                                            button_class="card-delete-btn"
                                            disabled=deleting
                                            on_confirm=Callback::new(move |_| {
                                                spawn_local(sync::delete_card(session, card_id));
                                            })
                                        />
                                        <button
                                            class="close-btn"
                                            on:click=move |_| session.open_card.set(None)
                                        >
                                            "×"
                                        </button>
                                    </div>

                                    <div class="dialog-content">
                                        <Show
                                            when=move || editing.get()
                                            fallback=move || {
                                                let html = markup::render_content_html(&content);
                                                view! {
                                                    <div
                                                        class="card-content"
                                                        node_ref=view_ref
                                                        inner_html=html
                                                        on:click=enter_edit
                                                        on:change=on_view_change
                                                    />
                                                }
                                            }
                                        >
                                            <div
                                                class="card-content editing"
                                                node_ref=edit_ref
                                                contenteditable="true"
                                                on:blur=on_editor_blur
                                                on:change=on_editor_change
                                            />
                                        </Show>
                                    </div>

                                    <LabelPicker card_id=card_id />
                                    <AttachmentList attachments=attachments />
                                }
                            })
                    }}
                </div>
            </div>
        </Show>
    }
}
