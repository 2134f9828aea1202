//! Board State Store
//!
//! Canonical entity state for the page session, using Leptos
//! reactive_stores for fine-grained reactivity. The server is the source
//! of truth: helpers here replace entities whole from authoritative
//! responses, and the keyed views downstream rebuild the affected node as
//! a unit.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Board, Card, CardList, Label};
use crate::sequence::LinkedOrder;

/// Canonical board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    pub board: Board,
    /// All lists on the board (linked by prev_list_id)
    pub lists: Vec<CardList>,
    /// All cards on the board, across lists (linked by prev_card_id)
    pub cards: Vec<Card>,
    /// Label slots, indexed by bit position
    pub labels: Vec<Label>,
    pub loaded: bool,
    pub load_failed: bool,
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

// ========================
// Order Views
// ========================

/// Lists in board order, head to tail. Corrupt chains yield the reachable
/// prefix (the defect is logged by the walk).
pub fn lists_in_order(lists: &[CardList]) -> Vec<CardList> {
    let order = LinkedOrder::new(lists.iter(), |l| l.id, |l| l.prev_list_id);
    order.iter().cloned().collect()
}

/// Cards of one list in order, head to tail.
pub fn cards_in_order(cards: &[Card], list_id: u32) -> Vec<Card> {
    let in_list = cards.iter().filter(|c| c.cardlist_id == list_id);
    let order = LinkedOrder::new(in_list, |c| c.id, |c| c.prev_card_id);
    order.iter().cloned().collect()
}

/// Id of the last card in a list (0 when the list is empty); new cards are
/// appended after it.
pub fn list_tail_id(cards: &[Card], list_id: u32) -> u32 {
    cards_in_order(cards, list_id).last().map(|c| c.id).unwrap_or(0)
}

/// Id of the last list on the board (0 when the board is empty).
pub fn board_tail_id(lists: &[CardList]) -> u32 {
    lists_in_order(lists).last().map(|l| l.id).unwrap_or(0)
}

// ========================
// Store Helper Functions
// ========================

pub fn store_load_snapshot(store: &BoardStore, snapshot: crate::models::BoardSnapshot) {
    store.board().set(snapshot.board);
    store.lists().set(snapshot.lists);
    store.cards().set(snapshot.cards);
    store.labels().set(snapshot.labels);
    store.loaded().set(true);
    store.load_failed().set(false);
}

/// Replace a card from an authoritative response
pub fn store_replace_card(store: &BoardStore, updated: Card) {
    store
        .cards()
        .write()
        .iter_mut()
        .find(|card| card.id == updated.id)
        .map(|card| *card = updated);
}

/// Replace a list from an authoritative response
pub fn store_replace_list(store: &BoardStore, updated: CardList) {
    store
        .lists()
        .write()
        .iter_mut()
        .find(|list| list.id == updated.id)
        .map(|list| *list = updated);
}

/// Insert or replace a label at its slot, keeping slots in index order
pub fn store_apply_label(store: &BoardStore, label: Label) {
    let binding = store.labels();
    let mut labels = binding.write();
    match labels.iter_mut().find(|l| l.index == label.index) {
        Some(slot) => *slot = label,
        None => {
            labels.push(label);
            labels.sort_by_key(|l| l.index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(id: u32, prev: u32) -> CardList {
        CardList { id, board_id: 1, name: format!("list {id}"), prev_list_id: prev }
    }

    fn card(id: u32, list: u32, prev: u32) -> Card {
        Card {
            id,
            cardlist_id: list,
            prev_card_id: prev,
            title: format!("card {id}"),
            content: String::new(),
            label_mask: 0,
            locked: false,
            cover_image: None,
        }
    }

    #[test]
    fn lists_walk_head_to_tail() {
        let lists = vec![list(3, 2), list(1, 0), list(2, 1)];
        let ids: Vec<u32> = lists_in_order(&lists).iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn card_order_is_scoped_to_one_list() {
        // both lists have a head card with prev = 0; the walks stay apart
        let cards = vec![card(1, 10, 0), card(2, 10, 1), card(3, 11, 0)];
        let ids: Vec<u32> = cards_in_order(&cards, 10).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
        let ids: Vec<u32> = cards_in_order(&cards, 11).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn tail_ids_for_appending() {
        let cards = vec![card(1, 10, 0), card(2, 10, 1)];
        assert_eq!(list_tail_id(&cards, 10), 2);
        assert_eq!(list_tail_id(&cards, 11), 0);
        let lists = vec![list(1, 0), list(2, 1)];
        assert_eq!(board_tail_id(&lists), 2);
        assert_eq!(board_tail_id(&[]), 0);
    }
}
