//! Cardwall Frontend App
//!
//! Main application component: builds the session-scoped state (store,
//! cache, notifier, drag signals), binds the document-level drag handlers,
//! loads the board, and lays out the page.

use board_dnd::{bind_global_pointer_handlers, create_drag_signals};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Board, DragGhost, NotificationArea, OpenCardDialog, TrashZone};
use crate::config::ApiConfig;
use crate::context::Session;
use crate::store::BoardStateStoreFields;
use crate::sync;

#[component]
pub fn App() -> impl IntoView {
    let session = Session::new(ApiConfig::from_location());
    provide_context(session);

    let dnd = create_drag_signals();
    bind_global_pointer_handlers(dnd, move |intent| sync::dispatch_intent(session, intent));

    let board_id = board_id_from_location();
    spawn_local(sync::load_board(session, board_id));

    view! {
        <div class="app-layout">
            <header class="board-header">
                <h1>{move || session.store.board().get().title}</h1>
            </header>

            <Show when=move || session.store.load_failed().get()>
                <div class="board-error">
                    "Couldn't load the board."
                    <button on:click=move |_| {
                        session.store.load_failed().set(false);
                        spawn_local(sync::load_board(session, board_id));
                    }>
                        "Retry"
                    </button>
                </div>
            </Show>

            <Board dnd=dnd />

            <TrashZone dnd=dnd />
            <DragGhost dnd=dnd />
            <OpenCardDialog />
            <NotificationArea />
        </div>
    }
}

/// Board selection comes from the page URL (`?board=N`); default 1.
fn board_id_from_location() -> u32 {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .and_then(|search| {
            search
                .trim_start_matches('?')
                .split('&')
                .find_map(|pair| pair.strip_prefix("board=").and_then(|v| v.parse().ok()))
        })
        .unwrap_or(1)
}
