//! Card List Operations

use serde::Serialize;

use super::{call, decode, Method};
use crate::config::ApiConfig;
use crate::errors::UiError;
use crate::models::{CardList, DeletedResult, MoveCardListResult};

#[derive(Serialize)]
struct IdParams {
    id: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveCardListParams {
    pub moved_cardlist_id: u32,
    pub new_prev_cardlist_id: u32,
}

#[derive(Serialize)]
pub struct AddNewCardListParams<'a> {
    pub board_id: u32,
    pub prev_list_id: u32,
    pub name: &'a str,
}

#[derive(Serialize)]
struct UpdateNameParams<'a> {
    id: u32,
    name: &'a str,
}

pub async fn add_new_cardlist(
    api: ApiConfig,
    params: &AddNewCardListParams<'_>,
) -> Result<CardList, UiError> {
    decode(call(api, "AddNewCardList", params, Method::Post).await?)
}

pub async fn move_cardlist(
    api: ApiConfig,
    params: &MoveCardListParams,
) -> Result<MoveCardListResult, UiError> {
    decode(call(api, "MoveCardList", params, Method::Post).await?)
}

pub async fn update_cardlist_name(api: ApiConfig, id: u32, name: &str) -> Result<CardList, UiError> {
    decode(call(api, "UpdateCardListName", &UpdateNameParams { id, name }, Method::Post).await?)
}

pub async fn delete_cardlist(api: ApiConfig, id: u32) -> Result<DeletedResult, UiError> {
    decode(call(api, "DeleteCardList", &IdParams { id }, Method::Post).await?)
}
