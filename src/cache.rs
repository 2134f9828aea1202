//! Open-card cache
//!
//! Session-lifetime memo of the last authoritative `Card` per id. Serves
//! two purposes: offline reads fall back to it (stale but available), and
//! title/content edits diff against it so an unchanged value never costs a
//! round trip. Overwritten whenever a fresh authoritative card arrives;
//! never evicted within the page session.

use leptos::prelude::*;
use std::collections::HashMap;

use crate::models::Card;

/// A pending title or content edit, for no-op diffing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEdit<'a> {
    Title(&'a str),
    Content(&'a str),
}

/// True when the edit would not change the cached authoritative value.
/// An uncached card is never a no-op (nothing to compare against).
pub fn edit_is_noop(cached: Option<&Card>, edit: CardEdit<'_>) -> bool {
    match (cached, edit) {
        (Some(card), CardEdit::Title(title)) => card.title == title,
        (Some(card), CardEdit::Content(content)) => card.content == content,
        (None, _) => false,
    }
}

#[derive(Clone, Copy)]
pub struct OpenCardCache {
    inner: StoredValue<HashMap<u32, Card>>,
}

impl OpenCardCache {
    pub fn new() -> Self {
        Self { inner: StoredValue::new(HashMap::new()) }
    }

    /// Overwrite the entry for this card with authoritative state.
    pub fn put(&self, card: Card) {
        self.inner.update_value(|map| {
            map.insert(card.id, card);
        });
    }

    pub fn get(&self, id: u32) -> Option<Card> {
        self.inner.with_value(|map| map.get(&id).cloned())
    }

    pub fn is_noop(&self, id: u32, edit: CardEdit<'_>) -> bool {
        self.inner.with_value(|map| edit_is_noop(map.get(&id), edit))
    }
}

impl Default for OpenCardCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u32, title: &str, content: &str) -> Card {
        Card {
            id,
            cardlist_id: 1,
            prev_card_id: 0,
            title: title.to_string(),
            content: content.to_string(),
            label_mask: 0,
            locked: false,
            cover_image: None,
        }
    }

    #[test]
    fn unchanged_values_are_noops() {
        let cached = card(1, "title", "body");
        assert!(edit_is_noop(Some(&cached), CardEdit::Title("title")));
        assert!(edit_is_noop(Some(&cached), CardEdit::Content("body")));
    }

    #[test]
    fn changed_values_are_not_noops() {
        let cached = card(1, "title", "body");
        assert!(!edit_is_noop(Some(&cached), CardEdit::Title("new title")));
        assert!(!edit_is_noop(Some(&cached), CardEdit::Content("new body")));
    }

    #[test]
    fn uncached_card_always_syncs() {
        assert!(!edit_is_noop(None, CardEdit::Title("anything")));
    }
}
