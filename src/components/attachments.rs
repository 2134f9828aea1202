//! Attachment List
//!
//! Attachment rows for the open card. A row without a URL is still
//! uploading and renders as a placeholder until a reload shows it
//! complete; thumbnails load lazily.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::{use_session, EntityKind};
use crate::models::Attachment;
use crate::sync;

use super::{DeleteConfirmButton, LazyImage};

#[component]
pub fn AttachmentList(attachments: RwSignal<Vec<Attachment>>) -> impl IntoView {
    view! {
        <div class="attachments">
            <For
                each=move || attachments.get()
                key=|a| a.clone()
                children=move |attachment| {
                    view! { <AttachmentRow attachment=attachment attachments=attachments /> }
                }
            />
        </div>
    }
}

#[component]
fn AttachmentRow(attachment: Attachment, attachments: RwSignal<Vec<Attachment>>) -> impl IntoView {
    let session = use_session();
    let id = attachment.id;
    let deleting =
        Signal::derive(move || session.inflight.active(EntityKind::Attachment, id));

    let preview = if attachment.is_uploading() {
        view! { <span class="attachment-uploading">"Uploading…"</span> }.into_any()
    } else if let Some(thumb) = attachment.thumbnail.clone() {
        view! { <LazyImage src=thumb class="attachment-thumb" alt=attachment.file_name.clone() /> }
            .into_any()
    } else {
        view! { <span class="attachment-icon">"📄"</span> }.into_any()
    };

    let name = match commands::attachment_href(&attachment) {
        Some(href) => view! {
            <a class="attachment-name" href=href target="_blank">
                {attachment.file_name.clone()}
            </a>
        }
        .into_any(),
        None => view! {
            <span class="attachment-name">{attachment.file_name.clone()}</span>
        }
        .into_any(),
    };

    view! {
        <div class="attachment-row">
            {preview}
            {name}
            <DeleteConfirmButton
                button_class="attachment-delete-btn"
                disabled=deleting
                on_confirm=Callback::new(move |_| {
                    spawn_local(async move {
                        if sync::delete_attachment(session, id).await {
                            attachments.update(|list| list.retain(|a| a.id != id));
                        }
                    });
                })
            />
        </div>
    }
}
