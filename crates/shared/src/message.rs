use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A posted message as stored and served.
///
/// Only `time` is guaranteed: the other fields are whatever the sender
/// supplied, and serialize as `null` when it supplied nothing.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct Message {
  pub text: Option<String>,
  pub sender: Option<String>,
  pub session_id: Option<String>,
  /// Local wall-clock time of arrival, `HH:MM`.
  #[schema(example = "09:41")]
  pub time: String,
}

/// Body of `POST /send`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq, ToSchema)]
pub struct SendMessage {
  pub text: Option<String>,
  pub sender: Option<String>,
  pub session_id: Option<String>,
}

impl Message {
  /// Stamp a submission with the current local time.
  #[must_use]
  pub fn stamped(payload: SendMessage) -> Self {
    Self::stamped_at(payload, &Local::now())
  }

  #[must_use]
  pub fn stamped_at<T: Timelike>(payload: SendMessage, at: &T) -> Self {
    Self {
      text: payload.text,
      sender: payload.sender,
      session_id: payload.session_id,
      time: clock_time(at),
    }
  }
}

/// Format as zero-padded 24-hour `HH:MM`.
pub fn clock_time<T: Timelike>(at: &T) -> String {
  format!("{:02}:{:02}", at.hour(), at.minute())
}

#[cfg(test)]
mod tests {
  use chrono::NaiveTime;

  use super::*;

  #[test]
  fn clock_time_is_zero_padded() {
    let at = NaiveTime::from_hms_opt(7, 5, 59).unwrap();
    assert_eq!(clock_time(&at), "07:05");
  }

  #[test]
  fn missing_fields_serialize_as_null() {
    let at = NaiveTime::from_hms_opt(23, 0, 0).unwrap();
    let message = Message::stamped_at(
      SendMessage {
        text: Some("hi".into()),
        ..SendMessage::default()
      },
      &at,
    );

    let value = serde_json::to_value(&message).unwrap();
    assert_eq!(
      value,
      serde_json::json!({
        "text": "hi",
        "sender": null,
        "session_id": null,
        "time": "23:00",
      })
    );
  }

  #[test]
  fn stamped_uses_current_clock() {
    let message = Message::stamped(SendMessage::default());
    let bytes = message.time.as_bytes();
    assert_eq!(bytes.len(), 5);
    assert_eq!(bytes[2], b':');
    assert!(bytes[..2].iter().chain(&bytes[3..]).all(u8::is_ascii_digit));
  }
}
