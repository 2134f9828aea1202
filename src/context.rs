//! Session Context
//!
//! Session-scoped state objects, constructed once in `App` and provided
//! through Leptos context. Nothing here is a module-level singleton; every
//! consumer receives the session explicitly.

use leptos::prelude::*;
use std::collections::HashSet;

use crate::cache::OpenCardCache;
use crate::config::ApiConfig;
use crate::store::{BoardState, BoardStore};

/// How long a transient notice stays up
pub const NOTICE_DISMISS_MS: u32 = 4000;

/// App-wide session state provided via context
#[derive(Clone, Copy)]
pub struct Session {
    pub api: ApiConfig,
    pub store: BoardStore,
    pub cache: OpenCardCache,
    pub notify: Notifier,
    pub inflight: InFlight,
    /// Card currently open in the dialog
    pub open_card: RwSignal<Option<u32>>,
}

impl Session {
    pub fn new(api: ApiConfig) -> Self {
        Self {
            api,
            store: BoardStore::new(BoardState::default()),
            cache: OpenCardCache::new(),
            notify: Notifier::new(),
            inflight: InFlight::new(),
            open_card: RwSignal::new(None),
        }
    }
}

/// Get the session from context
pub fn use_session() -> Session {
    expect_context::<Session>()
}

// ========================
// Transient notices
// ========================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u32,
    pub text: String,
}

/// Auto-dismissing notification area state
#[derive(Clone, Copy)]
pub struct Notifier {
    notices: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u32>,
}

impl Notifier {
    pub fn new() -> Self {
        Self { notices: RwSignal::new(Vec::new()), next_id: StoredValue::new(0) }
    }

    pub fn notices(&self) -> ReadSignal<Vec<Notice>> {
        self.notices.read_only()
    }

    /// Show a transient error; it dismisses itself after a few seconds.
    pub fn error(&self, text: impl Into<String>) {
        let id = self.next_id.with_value(|n| n.wrapping_add(1));
        self.next_id.set_value(id);
        self.notices.update(|list| list.push(Notice { id, text: text.into() }));
        let notices = self.notices;
        gloo_timers::callback::Timeout::new(NOTICE_DISMISS_MS, move || {
            notices.update(|list| list.retain(|n| n.id != id));
        })
        .forget();
    }

    pub fn dismiss(&self, id: u32) {
        self.notices.update(|list| list.retain(|n| n.id != id));
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

// ========================
// In-flight request guards
// ========================

/// One variant per interactive control, so a pending title edit does not
/// block an unrelated delete of the same card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    List,
    ListName,
    Card,
    CardTitle,
    CardContent,
    Label,
    Attachment,
}

/// At-most-one-in-flight guard per interactive control. Repeat triggers
/// (double blur, double click on delete) are suppressed until the first
/// request resolves.
#[derive(Clone, Copy)]
pub struct InFlight(RwSignal<HashSet<(EntityKind, u32)>>);

impl InFlight {
    pub fn new() -> Self {
        Self(RwSignal::new(HashSet::new()))
    }

    /// Returns false when a request for this entity is already out.
    pub fn begin(&self, kind: EntityKind, id: u32) -> bool {
        self.0.try_update(|set| set.insert((kind, id))).unwrap_or(false)
    }

    pub fn finish(&self, kind: EntityKind, id: u32) {
        self.0.update(|set| {
            set.remove(&(kind, id));
        });
    }

    /// Reactive: is a request for this entity outstanding?
    pub fn active(&self, kind: EntityKind, id: u32) -> bool {
        self.0.with(|set| set.contains(&(kind, id)))
    }
}

impl Default for InFlight {
    fn default() -> Self {
        Self::new()
    }
}
