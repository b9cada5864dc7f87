use axum::{Json, extract::State};
use hub_shared::Message;

use crate::utils::AppState;

/// List every stored message, oldest first
#[utoipa::path(
  get,
  path = "/get_messages",
  responses(
    (status = 200, description = "All current messages", body = Vec<Message>),
  )
)]
#[axum::debug_handler]
pub async fn get_messages(State(state): State<AppState>) -> Json<Vec<Message>> {
  Json(state.store.list_all().await)
}
