//! Board Label Operations
//!
//! The server owns label slot assignment: `CreateBoardLabel` returns the
//! index it chose, and the client inserts at that slot whether the server
//! reused a freed index or appended a new one.

use serde::Serialize;

use super::{call, decode, Method};
use crate::config::ApiConfig;
use crate::errors::UiError;
use crate::models::{DeletedLabelResult, Label};

#[derive(Serialize)]
pub struct CreateBoardLabelParams<'a> {
    pub board_id: u32,
    pub name: &'a str,
    pub color: &'a str,
}

#[derive(Serialize)]
struct UpdateLabelParams<'a> {
    board_id: u32,
    index: u8,
    name: &'a str,
    color: &'a str,
}

#[derive(Serialize)]
struct DeleteLabelParams {
    board_id: u32,
    index: u8,
}

pub async fn create_board_label(
    api: ApiConfig,
    params: &CreateBoardLabelParams<'_>,
) -> Result<Label, UiError> {
    decode(call(api, "CreateBoardLabel", params, Method::Post).await?)
}

pub async fn update_board_label(
    api: ApiConfig,
    board_id: u32,
    index: u8,
    name: &str,
    color: &str,
) -> Result<Label, UiError> {
    let params = UpdateLabelParams { board_id, index, name, color };
    decode(call(api, "UpdateBoardLabel", &params, Method::Post).await?)
}

/// Deletes the slot; the server clears the bit from every card on the
/// board, and the client mirrors that clearing locally.
pub async fn delete_board_label(
    api: ApiConfig,
    board_id: u32,
    index: u8,
) -> Result<DeletedLabelResult, UiError> {
    decode(call(api, "DeleteBoardLabel", &DeleteLabelParams { board_id, index }, Method::Post).await?)
}
