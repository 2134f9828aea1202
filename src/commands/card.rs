//! Card Operations
//!
//! Request/response contracts for card mutations. Move requests always
//! carry the full destination context so the server computes the final
//! order from absolute positions, never from client deltas.

use serde::Serialize;

use super::{call, decode, Method};
use crate::config::ApiConfig;
use crate::errors::UiError;
use crate::models::{Card, DeletedResult, MoveCardResult};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct IdParams {
    id: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveCardParams {
    pub moved_card_id: u32,
    pub new_prev_card_id: u32,
    pub dest_cardlist_id: u32,
}

#[derive(Serialize)]
pub struct AddNewCardParams<'a> {
    pub cardlist_id: u32,
    pub prev_card_id: u32,
    pub title: &'a str,
}

#[derive(Serialize)]
struct UpdateTitleParams<'a> {
    id: u32,
    title: &'a str,
}

#[derive(Serialize)]
struct UpdateContentParams<'a> {
    id: u32,
    content: &'a str,
}

#[derive(Serialize)]
struct SetLabelParams {
    id: u32,
    label_index: u8,
    value: bool,
}

#[derive(Serialize)]
struct SetLockParams {
    id: u32,
    locked: bool,
}

// ========================
// Commands
// ========================

pub async fn load_card(api: ApiConfig, id: u32) -> Result<Card, UiError> {
    decode(call(api, "LoadCard", &IdParams { id }, Method::Get).await?)
}

pub async fn add_new_card(api: ApiConfig, params: &AddNewCardParams<'_>) -> Result<Card, UiError> {
    decode(call(api, "AddNewCard", params, Method::Post).await?)
}

pub async fn move_card(api: ApiConfig, params: &MoveCardParams) -> Result<MoveCardResult, UiError> {
    decode(call(api, "MoveCard", params, Method::Post).await?)
}

pub async fn update_card_title(api: ApiConfig, id: u32, title: &str) -> Result<Card, UiError> {
    decode(call(api, "UpdateCardTitle", &UpdateTitleParams { id, title }, Method::Post).await?)
}

pub async fn update_card_content(api: ApiConfig, id: u32, content: &str) -> Result<Card, UiError> {
    decode(call(api, "UpdateCardContent", &UpdateContentParams { id, content }, Method::Post).await?)
}

pub async fn delete_card(api: ApiConfig, id: u32) -> Result<DeletedResult, UiError> {
    decode(call(api, "DeleteCard", &IdParams { id }, Method::Post).await?)
}

pub async fn set_card_label(
    api: ApiConfig,
    id: u32,
    label_index: u8,
    value: bool,
) -> Result<Card, UiError> {
    decode(call(api, "SetCardLabel", &SetLabelParams { id, label_index, value }, Method::Post).await?)
}

pub async fn set_card_lock(api: ApiConfig, id: u32, locked: bool) -> Result<Card, UiError> {
    decode(call(api, "SetCardLock", &SetLockParams { id, locked }, Method::Post).await?)
}
