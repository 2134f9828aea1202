//! Optimistic mutation drivers
//!
//! One user edit -> one server confirmation -> one UI patch. Each driver
//! applies the mutation to the store immediately, issues the request, and
//! on the response either replaces the optimistic state with the
//! authoritative entity or restores the pre-edit snapshot and raises a
//! notice. Requests always carry absolute destination context (dest list,
//! new previous-id); the server computes final order, never client deltas.
//!
//! Overlapping requests for one entity resolve last-response-wins; there
//! is no per-entity sequencing.

use leptos::prelude::*;
use leptos::task::spawn_local;

use board_dnd::{DragIntent, DragItem, DropTarget};

use crate::cache::CardEdit;
use crate::commands::{self, AddNewCardListParams, AddNewCardParams, CreateBoardLabelParams,
    MoveCardListParams, MoveCardParams};
use crate::context::{EntityKind, Session};
use crate::errors::UiError;
use crate::labels;
use crate::models::{Attachment, Card, CardList, MoveCardListResult, MoveCardResult};
use crate::store::{self, store_apply_label, store_load_snapshot, store_replace_card,
    store_replace_list, BoardStateStoreFields};

// ========================
// Move planning (pure)
// ========================

/// Full destination context for a card move, or None when the drop lands
/// the card exactly where it already is (idempotent: no request).
pub fn plan_card_move(
    cards: &[Card],
    card_id: u32,
    dest_cardlist_id: u32,
    new_prev_card_id: u32,
) -> Option<MoveCardParams> {
    let card = cards.iter().find(|c| c.id == card_id)?;
    // the slot directly below the card names the card itself as anchor
    if new_prev_card_id == card.id {
        return None;
    }
    if card.cardlist_id == dest_cardlist_id && card.prev_card_id == new_prev_card_id {
        return None;
    }
    Some(MoveCardParams { moved_card_id: card_id, new_prev_card_id, dest_cardlist_id })
}

pub fn plan_list_move(
    lists: &[CardList],
    list_id: u32,
    new_prev_list_id: u32,
) -> Option<MoveCardListParams> {
    let list = lists.iter().find(|l| l.id == list_id)?;
    if new_prev_list_id == list.id || list.prev_list_id == new_prev_list_id {
        return None;
    }
    Some(MoveCardListParams { moved_cardlist_id: list_id, new_prev_cardlist_id: new_prev_list_id })
}

// ========================
// Relinking (pure)
// ========================

/// Re-home a card at the position a move result names: unlink it from its
/// old chain, splice it after the destination anchor. Used both for the
/// optimistic application and for the authoritative one.
pub fn apply_card_move(cards: &mut [Card], res: &MoveCardResult) -> Result<(), UiError> {
    let Some(pos) = cards.iter().position(|c| c.id == res.id) else {
        return Err(UiError::MissingAnchor { id: res.id });
    };
    let anchored = res.prev_card_id == 0
        || cards
            .iter()
            .any(|c| c.id == res.prev_card_id && c.cardlist_id == res.cardlist_id && c.id != res.id);
    if !anchored {
        return Err(UiError::MissingAnchor { id: res.prev_card_id });
    }

    let old_list = cards[pos].cardlist_id;
    let old_prev = cards[pos].prev_card_id;
    if old_list == res.cardlist_id && old_prev == res.prev_card_id {
        return Ok(());
    }

    // unlink: the old successor now follows the moved card's old prev
    if let Some(succ) = cards
        .iter_mut()
        .find(|c| c.id != res.id && c.cardlist_id == old_list && c.prev_card_id == res.id)
    {
        succ.prev_card_id = old_prev;
    }
    // link: whatever followed the destination anchor now follows the card
    if let Some(succ) = cards.iter_mut().find(|c| {
        c.id != res.id && c.cardlist_id == res.cardlist_id && c.prev_card_id == res.prev_card_id
    }) {
        succ.prev_card_id = res.id;
    }
    let moved = &mut cards[pos];
    moved.cardlist_id = res.cardlist_id;
    moved.prev_card_id = res.prev_card_id;
    Ok(())
}

pub fn apply_list_move(lists: &mut [CardList], res: &MoveCardListResult) -> Result<(), UiError> {
    let Some(pos) = lists.iter().position(|l| l.id == res.id) else {
        return Err(UiError::MissingAnchor { id: res.id });
    };
    let anchored =
        res.prev_list_id == 0 || lists.iter().any(|l| l.id == res.prev_list_id && l.id != res.id);
    if !anchored {
        return Err(UiError::MissingAnchor { id: res.prev_list_id });
    }

    let old_prev = lists[pos].prev_list_id;
    if old_prev == res.prev_list_id {
        return Ok(());
    }

    if let Some(succ) = lists.iter_mut().find(|l| l.id != res.id && l.prev_list_id == res.id) {
        succ.prev_list_id = old_prev;
    }
    if let Some(succ) =
        lists.iter_mut().find(|l| l.id != res.id && l.prev_list_id == res.prev_list_id)
    {
        succ.prev_list_id = res.id;
    }
    lists[pos].prev_list_id = res.prev_list_id;
    Ok(())
}

/// Unlink and drop a card, repairing its old chain.
pub fn remove_card(cards: &mut Vec<Card>, id: u32) -> Option<Card> {
    let pos = cards.iter().position(|c| c.id == id)?;
    let (list, prev) = (cards[pos].cardlist_id, cards[pos].prev_card_id);
    if let Some(succ) =
        cards.iter_mut().find(|c| c.id != id && c.cardlist_id == list && c.prev_card_id == id)
    {
        succ.prev_card_id = prev;
    }
    Some(cards.remove(pos))
}

/// Unlink and drop a list and every card in it.
pub fn remove_list(lists: &mut Vec<CardList>, cards: &mut Vec<Card>, id: u32) -> Option<CardList> {
    let pos = lists.iter().position(|l| l.id == id)?;
    let prev = lists[pos].prev_list_id;
    if let Some(succ) = lists.iter_mut().find(|l| l.id != id && l.prev_list_id == id) {
        succ.prev_list_id = prev;
    }
    cards.retain(|c| c.cardlist_id != id);
    Some(lists.remove(pos))
}

/// Add a server-created card, repairing the chain if something already
/// claimed its position.
pub fn insert_card(cards: &mut Vec<Card>, card: Card) {
    if let Some(succ) = cards.iter_mut().find(|c| {
        c.id != card.id && c.cardlist_id == card.cardlist_id && c.prev_card_id == card.prev_card_id
    }) {
        succ.prev_card_id = card.id;
    }
    cards.push(card);
}

pub fn insert_list(lists: &mut Vec<CardList>, list: CardList) {
    if let Some(succ) =
        lists.iter_mut().find(|l| l.id != list.id && l.prev_list_id == list.prev_list_id)
    {
        succ.prev_list_id = list.id;
    }
    lists.push(list);
}

// ========================
// Drag intent dispatch
// ========================

/// Resolve a completed drag into the matching driver. A card dropped on a
/// list slot (or a list on a card slot) is not a valid target and falls
/// through as a cancelled drag.
pub fn dispatch_intent(session: Session, intent: DragIntent) {
    match intent {
        DragIntent::Move {
            item: DragItem::Card { id, .. },
            target: DropTarget::CardSlot { list_id, prev_card_id },
        } => spawn_local(move_card(session, id, list_id, prev_card_id)),
        DragIntent::Move {
            item: DragItem::List(id),
            target: DropTarget::ListSlot { prev_list_id },
        } => spawn_local(move_list(session, id, prev_list_id)),
        DragIntent::Delete(DragItem::Card { id, .. }) => spawn_local(delete_card(session, id)),
        DragIntent::Delete(DragItem::List(id)) => spawn_local(delete_list(session, id)),
        DragIntent::Move { .. } => {}
    }
}

// ========================
// Drivers
// ========================

pub async fn load_board(session: Session, board_id: u32) {
    match commands::load_board(session.api, board_id).await {
        Ok(snapshot) => store_load_snapshot(&session.store, snapshot),
        Err(e) => {
            session.store.load_failed().set(true);
            session.notify.error(e.to_string());
        }
    }
}

pub async fn move_card(session: Session, card_id: u32, dest_cardlist_id: u32, new_prev: u32) {
    let plan = {
        let cards = session.store.cards().get_untracked();
        plan_card_move(&cards, card_id, dest_cardlist_id, new_prev)
    };
    let Some(params) = plan else {
        // dropped back where it was: no request, order unchanged
        return;
    };

    let snapshot = session.store.cards().get_untracked();
    let optimistic = MoveCardResult {
        id: params.moved_card_id,
        cardlist_id: params.dest_cardlist_id,
        prev_card_id: params.new_prev_card_id,
    };
    let applied = apply_card_move(&mut session.store.cards().write(), &optimistic);
    if let Err(e) = applied {
        session.notify.error(e.to_string());
        return;
    }

    match commands::move_card(session.api, &params).await {
        Ok(res) => {
            let applied = apply_card_move(&mut session.store.cards().write(), &res);
            if let Err(e) = applied {
                session.notify.error(e.to_string());
            }
        }
        Err(e) => {
            session.store.cards().set(snapshot);
            session.notify.error(e.to_string());
        }
    }
}

pub async fn move_list(session: Session, list_id: u32, new_prev: u32) {
    let plan = {
        let lists = session.store.lists().get_untracked();
        plan_list_move(&lists, list_id, new_prev)
    };
    let Some(params) = plan else { return };

    let snapshot = session.store.lists().get_untracked();
    let optimistic =
        MoveCardListResult { id: params.moved_cardlist_id, prev_list_id: params.new_prev_cardlist_id };
    let applied = apply_list_move(&mut session.store.lists().write(), &optimistic);
    if let Err(e) = applied {
        session.notify.error(e.to_string());
        return;
    }

    match commands::move_cardlist(session.api, &params).await {
        Ok(res) => {
            let applied = apply_list_move(&mut session.store.lists().write(), &res);
            if let Err(e) = applied {
                session.notify.error(e.to_string());
            }
        }
        Err(e) => {
            session.store.lists().set(snapshot);
            session.notify.error(e.to_string());
        }
    }
}

pub async fn add_card(session: Session, cardlist_id: u32, title: String) {
    let prev_card_id = {
        let cards = session.store.cards().get_untracked();
        store::list_tail_id(&cards, cardlist_id)
    };
    let params = AddNewCardParams { cardlist_id, prev_card_id, title: &title };
    match commands::add_new_card(session.api, &params).await {
        Ok(card) => insert_card(&mut session.store.cards().write(), card),
        Err(e) => session.notify.error(e.to_string()),
    }
}

pub async fn delete_card(session: Session, card_id: u32) {
    if !session.inflight.begin(EntityKind::Card, card_id) {
        return;
    }
    let snapshot = session.store.cards().get_untracked();
    remove_card(&mut session.store.cards().write(), card_id);
    if session.open_card.get_untracked() == Some(card_id) {
        session.open_card.set(None);
    }

    match commands::delete_card(session.api, card_id).await {
        Ok(_) => {}
        Err(e) => {
            session.store.cards().set(snapshot);
            session.notify.error(e.to_string());
        }
    }
    session.inflight.finish(EntityKind::Card, card_id);
}

pub async fn add_list(session: Session, name: String) {
    let (board_id, prev_list_id) = {
        let lists = session.store.lists().get_untracked();
        (session.store.board().get_untracked().id, store::board_tail_id(&lists))
    };
    let params = AddNewCardListParams { board_id, prev_list_id, name: &name };
    match commands::add_new_cardlist(session.api, &params).await {
        Ok(list) => insert_list(&mut session.store.lists().write(), list),
        Err(e) => session.notify.error(e.to_string()),
    }
}

pub async fn rename_list(session: Session, list_id: u32, name: String) {
    let unchanged = session
        .store
        .lists()
        .with_untracked(|lists| lists.iter().any(|l| l.id == list_id && l.name == name));
    if unchanged {
        return;
    }
    if !session.inflight.begin(EntityKind::ListName, list_id) {
        return;
    }
    let snapshot = session.store.lists().get_untracked();
    if let Some(list) = session.store.lists().write().iter_mut().find(|l| l.id == list_id) {
        list.name = name.clone();
    }
    match commands::update_cardlist_name(session.api, list_id, &name).await {
        Ok(list) => store_replace_list(&session.store, list),
        Err(e) => {
            session.store.lists().set(snapshot);
            session.notify.error(e.to_string());
        }
    }
    session.inflight.finish(EntityKind::ListName, list_id);
}

pub async fn delete_list(session: Session, list_id: u32) {
    if !session.inflight.begin(EntityKind::List, list_id) {
        return;
    }
    let lists_snapshot = session.store.lists().get_untracked();
    let cards_snapshot = session.store.cards().get_untracked();
    let mut lists = lists_snapshot.clone();
    let mut cards = cards_snapshot.clone();
    remove_list(&mut lists, &mut cards, list_id);
    session.store.lists().set(lists);
    session.store.cards().set(cards);

    match commands::delete_cardlist(session.api, list_id).await {
        Ok(_) => {}
        Err(e) => {
            session.store.lists().set(lists_snapshot);
            session.store.cards().set(cards_snapshot);
            session.notify.error(e.to_string());
        }
    }
    session.inflight.finish(EntityKind::List, list_id);
}

pub async fn update_card_title(session: Session, card_id: u32, title: String) {
    if session.cache.is_noop(card_id, CardEdit::Title(&title)) {
        return;
    }
    // a second blur with the same value while the first request is still
    // out must not produce a duplicate
    if !session.inflight.begin(EntityKind::CardTitle, card_id) {
        return;
    }
    let snapshot = session.store.cards().get_untracked();
    if let Some(card) = session.store.cards().write().iter_mut().find(|c| c.id == card_id) {
        card.title = title.clone();
    }
    match commands::update_card_title(session.api, card_id, &title).await {
        Ok(card) => {
            session.cache.put(card.clone());
            store_replace_card(&session.store, card);
        }
        Err(e) => {
            session.store.cards().set(snapshot);
            session.notify.error(e.to_string());
        }
    }
    session.inflight.finish(EntityKind::CardTitle, card_id);
}

pub async fn update_card_content(session: Session, card_id: u32, content: String) {
    if session.cache.is_noop(card_id, CardEdit::Content(&content)) {
        return;
    }
    if !session.inflight.begin(EntityKind::CardContent, card_id) {
        return;
    }
    let snapshot = session.store.cards().get_untracked();
    if let Some(card) = session.store.cards().write().iter_mut().find(|c| c.id == card_id) {
        card.content = content.clone();
    }
    match commands::update_card_content(session.api, card_id, &content).await {
        Ok(card) => {
            session.cache.put(card.clone());
            store_replace_card(&session.store, card);
        }
        Err(e) => {
            session.store.cards().set(snapshot);
            session.notify.error(e.to_string());
        }
    }
    session.inflight.finish(EntityKind::CardContent, card_id);
}

pub async fn set_card_label(session: Session, card_id: u32, index: u8, value: bool) {
    let snapshot = session.store.cards().get_untracked();
    if let Some(card) = session.store.cards().write().iter_mut().find(|c| c.id == card_id) {
        card.label_mask = labels::with_label(card.label_mask, index, value);
    }
    match commands::set_card_label(session.api, card_id, index, value).await {
        Ok(card) => {
            session.cache.put(card.clone());
            store_replace_card(&session.store, card);
        }
        Err(e) => {
            session.store.cards().set(snapshot);
            session.notify.error(e.to_string());
        }
    }
}

pub async fn set_card_lock(session: Session, card_id: u32, locked: bool) {
    let snapshot = session.store.cards().get_untracked();
    if let Some(card) = session.store.cards().write().iter_mut().find(|c| c.id == card_id) {
        card.locked = locked;
    }
    match commands::set_card_lock(session.api, card_id, locked).await {
        Ok(card) => {
            session.cache.put(card.clone());
            store_replace_card(&session.store, card);
        }
        Err(e) => {
            session.store.cards().set(snapshot);
            session.notify.error(e.to_string());
        }
    }
}

pub async fn create_label(session: Session, name: String, color: String) {
    let board_id = session.store.board().get_untracked().id;
    let params = CreateBoardLabelParams { board_id, name: &name, color: &color };
    match commands::create_board_label(session.api, &params).await {
        // the server picks the slot; render whatever index it assigned
        Ok(label) => store_apply_label(&session.store, label),
        Err(e) => session.notify.error(e.to_string()),
    }
}

pub async fn update_label(session: Session, index: u8, name: String, color: String) {
    let board_id = session.store.board().get_untracked().id;
    let snapshot = session.store.labels().get_untracked();
    if let Some(label) = session.store.labels().write().iter_mut().find(|l| l.index == index) {
        label.name = name.clone();
        label.color = color.clone();
    }
    match commands::update_board_label(session.api, board_id, index, &name, &color).await {
        Ok(label) => store_apply_label(&session.store, label),
        Err(e) => {
            session.store.labels().set(snapshot);
            session.notify.error(e.to_string());
        }
    }
}

/// Delete a label slot: clears its bit from every card on the board and
/// empties the slot, mirroring what the server does.
pub async fn delete_label(session: Session, index: u8) {
    if !session.inflight.begin(EntityKind::Label, u32::from(index)) {
        return;
    }
    let board_id = session.store.board().get_untracked().id;
    let labels_snapshot = session.store.labels().get_untracked();
    let cards_snapshot = session.store.cards().get_untracked();
    labels::mark_slot_deleted(&mut session.store.labels().write(), index);
    labels::clear_label_everywhere(&mut session.store.cards().write(), index);

    match commands::delete_board_label(session.api, board_id, index).await {
        Ok(_) => {}
        Err(e) => {
            session.store.labels().set(labels_snapshot);
            session.store.cards().set(cards_snapshot);
            session.notify.error(e.to_string());
        }
    }
    session.inflight.finish(EntityKind::Label, u32::from(index));
}

/// Fetch the authoritative card for the open-card dialog. Offline falls
/// back to the cache (stale but available); with nothing cached this is a
/// hard error.
pub async fn open_card(session: Session, card_id: u32) -> Option<Card> {
    if !commands::is_online() {
        return offline_card(session, card_id);
    }
    match commands::load_card(session.api, card_id).await {
        Ok(card) => {
            session.cache.put(card.clone());
            store_replace_card(&session.store, card.clone());
            Some(card)
        }
        Err(UiError::Offline) => offline_card(session, card_id),
        Err(e) => {
            session.notify.error(e.to_string());
            None
        }
    }
}

fn offline_card(session: Session, card_id: u32) -> Option<Card> {
    match session.cache.get(card_id) {
        Some(card) => Some(card),
        None => {
            session.notify.error(UiError::Offline.to_string());
            None
        }
    }
}

pub async fn load_attachments(session: Session, card_id: u32) -> Vec<Attachment> {
    match commands::load_open_card_attachments(session.api, card_id).await {
        Ok(attachments) => attachments,
        Err(e) => {
            session.notify.error(e.to_string());
            Vec::new()
        }
    }
}

/// Returns true when the attachment is gone server-side.
pub async fn delete_attachment(session: Session, attachment_id: u32) -> bool {
    if !session.inflight.begin(EntityKind::Attachment, attachment_id) {
        return false;
    }
    let deleted = match commands::delete_attachment(session.api, attachment_id).await {
        Ok(_) => true,
        Err(e) => {
            session.notify.error(e.to_string());
            false
        }
    };
    session.inflight.finish(EntityKind::Attachment, attachment_id);
    deleted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{cards_in_order, lists_in_order};

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

    fn list(id: u32, prev: u32) -> CardList {
        CardList { id, board_id: 1, name: format!("list {id}"), prev_list_id: prev }
    }

    fn card_ids(cards: &[Card], list: u32) -> Vec<u32> {
        cards_in_order(cards, list).iter().map(|c| c.id).collect()
    }

    #[test]
    fn dropping_a_card_back_on_its_prev_is_a_noop() {
        // card 6 sits behind card 5; dropping it onto card 5's slot again
        // must not produce a request
        let cards = vec![card(5, 1, 0), card(6, 1, 5)];
        assert_eq!(plan_card_move(&cards, 6, 1, 5), None);
    }

    #[test]
    fn dropping_a_card_on_its_own_slot_is_a_noop() {
        let cards = vec![card(5, 1, 0), card(6, 1, 5)];
        assert_eq!(plan_card_move(&cards, 5, 1, 5), None);
    }

    #[test]
    fn cross_list_move_carries_full_destination_context() {
        let cards = vec![card(7, 4, 0), card(10, 3, 0)];
        let params = plan_card_move(&cards, 10, 4, 7).unwrap();
        assert_eq!(
            params,
            MoveCardParams { moved_card_id: 10, new_prev_card_id: 7, dest_cardlist_id: 4 }
        );
    }

    #[test]
    fn card_move_relocates_across_lists() {
        // list 3: 8 -> 10 -> 9, list 4: 7 -> 11
        let mut cards = vec![
            card(8, 3, 0),
            card(10, 3, 8),
            card(9, 3, 10),
            card(7, 4, 0),
            card(11, 4, 7),
        ];
        let res = MoveCardResult { id: 10, cardlist_id: 4, prev_card_id: 7 };
        apply_card_move(&mut cards, &res).unwrap();
        assert_eq!(card_ids(&cards, 3), vec![8, 9]);
        assert_eq!(card_ids(&cards, 4), vec![7, 10, 11]);
    }

    #[test]
    fn card_move_to_head_within_a_list() {
        let mut cards = vec![card(1, 1, 0), card(2, 1, 1), card(3, 1, 2)];
        let res = MoveCardResult { id: 3, cardlist_id: 1, prev_card_id: 0 };
        apply_card_move(&mut cards, &res).unwrap();
        assert_eq!(card_ids(&cards, 1), vec![3, 1, 2]);
    }

    #[test]
    fn card_move_with_unknown_anchor_is_rejected() {
        let mut cards = vec![card(1, 1, 0)];
        let res = MoveCardResult { id: 1, cardlist_id: 1, prev_card_id: 99 };
        assert_eq!(
            apply_card_move(&mut cards, &res),
            Err(UiError::MissingAnchor { id: 99 })
        );
        // unrelated state untouched
        assert_eq!(cards, vec![card(1, 1, 0)]);
    }

    #[test]
    fn list_move_to_front_of_board() {
        // board: L1 -> L2; drag L2 before L1
        let mut lists = vec![list(1, 0), list(2, 1)];
        let params = plan_list_move(&lists, 2, 0).unwrap();
        assert_eq!(
            params,
            MoveCardListParams { moved_cardlist_id: 2, new_prev_cardlist_id: 0 }
        );
        let res = MoveCardListResult { id: 2, prev_list_id: 0 };
        apply_list_move(&mut lists, &res).unwrap();
        let ids: Vec<u32> = lists_in_order(&lists).iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn list_move_back_to_current_position_is_a_noop() {
        let lists = vec![list(1, 0), list(2, 1)];
        assert_eq!(plan_list_move(&lists, 2, 1), None);
        assert_eq!(plan_list_move(&lists, 2, 2), None);
    }

    #[test]
    fn removing_a_card_repairs_its_chain() {
        let mut cards = vec![card(1, 1, 0), card(2, 1, 1), card(3, 1, 2)];
        let removed = remove_card(&mut cards, 2).unwrap();
        assert_eq!(removed.id, 2);
        assert_eq!(card_ids(&cards, 1), vec![1, 3]);
    }

    #[test]
    fn removing_a_list_drops_its_cards_and_relinks() {
        let mut lists = vec![list(1, 0), list(2, 1), list(3, 2)];
        let mut cards = vec![card(1, 2, 0), card(2, 2, 1), card(3, 1, 0)];
        remove_list(&mut lists, &mut cards, 2).unwrap();
        let ids: Vec<u32> = lists_in_order(&lists).iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(cards.iter().all(|c| c.cardlist_id != 2));
    }

    #[test]
    fn inserting_a_card_repairs_a_contested_position() {
        let mut cards = vec![card(1, 1, 0)];
        insert_card(&mut cards, card(2, 1, 0));
        assert_eq!(card_ids(&cards, 1), vec![2, 1]);
    }

    #[test]
    fn optimistic_then_authoritative_application_converges() {
        let mut cards = vec![card(1, 1, 0), card(2, 1, 1), card(3, 2, 0)];
        let params = plan_card_move(&cards, 2, 2, 3).unwrap();
        // optimistic
        let optimistic = MoveCardResult {
            id: params.moved_card_id,
            cardlist_id: params.dest_cardlist_id,
            prev_card_id: params.new_prev_card_id,
        };
        apply_card_move(&mut cards, &optimistic).unwrap();
        assert_eq!(card_ids(&cards, 2), vec![3, 2]);
        // authoritative response confirms the same position: idempotent
        apply_card_move(&mut cards, &optimistic).unwrap();
        assert_eq!(card_ids(&cards, 2), vec![3, 2]);
        assert_eq!(card_ids(&cards, 1), vec![1]);
    }
}
