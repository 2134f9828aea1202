//! Notification Area
//!
//! Transient, auto-dismissing notices raised by failed operations. Click
//! dismisses early; otherwise the notifier's timer takes them down.

use leptos::prelude::*;

use crate::context::use_session;

#[component]
pub fn NotificationArea() -> impl IntoView {
    let session = use_session();
    let notices = session.notify.notices();

    view! {
        <div class="notice-area">
            <For
                each=move || notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class="notice notice-error" on:click=move |_| session.notify.dismiss(id)>
                            {notice.text.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
