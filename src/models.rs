//! Frontend Models
//!
//! Data structures matching backend entities, plus the per-operation result
//! shapes. Responses carry the contextual fields (`cardlist_id`,
//! `prev_card_id`) the client needs to re-insert an entity at its canonical
//! position.

use serde::{Deserialize, Serialize};

/// Board data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    pub id: u32,
    pub title: String,
}

/// Card list data structure (matches backend)
///
/// Lists on a board form a single linked sequence; `prev_list_id == 0`
/// marks the head.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardList {
    pub id: u32,
    pub board_id: u32,
    pub name: String,
    pub prev_list_id: u32,
}

/// Card data structure (matches backend)
///
/// Cards in a list form a single linked sequence; `prev_card_id == 0`
/// marks the head of the owning list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: u32,
    pub cardlist_id: u32,
    pub prev_card_id: u32,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Bit i set <=> label slot i applied
    #[serde(default)]
    pub label_mask: u32,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub cover_image: Option<String>,
}

/// Label slot on a board, addressed by bit position
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    pub index: u8,
    pub name: String,
    pub color: String,
}

impl Label {
    /// Deleting a label clears its name and color; the slot stays in place.
    pub fn is_deleted(&self) -> bool {
        self.name.is_empty() && self.color.is_empty()
    }
}

/// Attachment on a card
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attachment {
    pub id: u32,
    pub card_id: u32,
    pub file_name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl Attachment {
    /// An attachment without a URL is still being uploaded.
    pub fn is_uploading(&self) -> bool {
        self.url.is_none()
    }
}

/// Everything `LoadBoard` returns
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BoardSnapshot {
    pub board: Board,
    pub lists: Vec<CardList>,
    pub cards: Vec<Card>,
    pub labels: Vec<Label>,
}

/// Result of `MoveCard`: the canonical position the server settled on
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoveCardResult {
    pub id: u32,
    pub cardlist_id: u32,
    pub prev_card_id: u32,
}

/// Result of `MoveCardList`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoveCardListResult {
    pub id: u32,
    pub prev_list_id: u32,
}

/// Result of the delete operations
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeletedResult {
    pub id: u32,
}

/// Result of `DeleteBoardLabel`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeletedLabelResult {
    pub index: u8,
}
