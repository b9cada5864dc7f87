use axum::{Json, extract::State, extract::rejection::JsonRejection};
use hub_shared::{AppError, Message, SendMessage};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::utils::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct SendStatus {
  #[schema(example = "success")]
  pub status: String,
}

impl SendStatus {
  fn success() -> Self {
    Self {
      status: "success".to_owned(),
    }
  }
}

/// Pull the submission out of an arbitrary JSON document.
///
/// Strings are kept verbatim, other non-null values as their JSON text.
/// Anything that is not an object yields an empty submission.
fn lenient_payload(body: &Value) -> SendMessage {
  let field = |key: &str| match body.get(key)? {
    Value::Null => None,
    Value::String(s) => Some(s.clone()),
    other => Some(other.to_string()),
  };

  SendMessage {
    text: field("text"),
    sender: field("sender"),
    session_id: field("session_id"),
  }
}

/// Post a message to the board
#[utoipa::path(
  post,
  path = "/send",
  request_body = SendMessage,
  responses(
    (status = 200, description = "Message stored", body = SendStatus),
    (status = 400, description = "Body is not valid JSON"),
    (status = 415, description = "Missing JSON content type")
  )
)]
#[axum::debug_handler]
pub async fn send_message(
  State(state): State<AppState>,
  payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SendStatus>, AppError> {
  let Json(body) = payload.map_err(|rejection| {
    let status = rejection.status();
    AppError::with_status(status, rejection)
  })?;

  let message = Message::stamped(lenient_payload(&body));
  tracing::debug!(
    sender = ?message.sender,
    session_id = ?message.session_id,
    time = %message.time,
    "message received"
  );
  state.store.append(message).await;

  Ok(Json(SendStatus::success()))
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn keeps_string_fields() {
    let payload = lenient_payload(&json!({
      "text": "hi",
      "sender": "Bob",
      "session_id": "abc123",
    }));

    assert_eq!(payload.text.as_deref(), Some("hi"));
    assert_eq!(payload.sender.as_deref(), Some("Bob"));
    assert_eq!(payload.session_id.as_deref(), Some("abc123"));
  }

  #[test]
  fn missing_and_null_fields_become_none() {
    let payload = lenient_payload(&json!({ "text": "hi", "sender": null }));
    assert_eq!(payload.sender, None);
    assert_eq!(payload.session_id, None);
  }

  #[test]
  fn non_string_values_keep_their_json_text() {
    let payload = lenient_payload(&json!({ "text": 42, "sender": ["a", "b"] }));
    assert_eq!(payload.text.as_deref(), Some("42"));
    assert_eq!(payload.sender.as_deref(), Some(r#"["a","b"]"#));
  }

  #[test]
  fn non_object_body_is_empty_submission() {
    assert_eq!(lenient_payload(&json!([1, 2, 3])), SendMessage::default());
    assert_eq!(lenient_payload(&json!("hello")), SendMessage::default());
  }
}
