use axum::{
  Json, Router,
  routing::{get, post},
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::utils::AppState;

mod get_messages;
mod send_message;

pub use send_message::SendStatus;

#[derive(OpenApi)]
#[openapi(
  info(
    title = "Hub API",
    version = "0.0.1",
    description = "Shared message board"
  ),
  paths(get_messages::get_messages, send_message::send_message),
  components(schemas(hub_shared::Message, hub_shared::SendMessage, SendStatus))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
  Json(ApiDoc::openapi())
}

pub fn app() -> Router<AppState> {
  Router::new()
    .route("/get_messages", get(get_messages::get_messages))
    .route("/send", post(send_message::send_message))
    .route("/openapi.json", get(openapi_json))
    .merge(Scalar::with_url("/openapi/", ApiDoc::openapi()))
}
