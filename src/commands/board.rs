//! Board Operations

use serde::Serialize;

use super::{call, decode, Method};
use crate::config::ApiConfig;
use crate::errors::UiError;
use crate::models::BoardSnapshot;

#[derive(Serialize)]
struct BoardIdParams {
    board_id: u32,
}

/// Fetch the whole board: lists, cards, and label slots in one response.
pub async fn load_board(api: ApiConfig, board_id: u32) -> Result<BoardSnapshot, UiError> {
    decode(call(api, "LoadBoard", &BoardIdParams { board_id }, Method::Get).await?)
}
