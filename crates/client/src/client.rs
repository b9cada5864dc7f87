use hub_shared::{Message, SendMessage};
use tracing::debug;

use crate::{ClientError, MessageSink, SessionToken};

const FALLBACK_SENDER: &str = "Anon";

/// Anything the poller can read the board from.
pub trait MessageSource {
  fn fetch(&self) -> impl Future<Output = Result<Vec<Message>, ClientError>> + Send;
}

/// Build an outgoing message the way the composer does.
///
/// Returns `None` when the trimmed text is empty. A blank sender becomes
/// `"Anon"`.
#[must_use]
pub fn compose(text: &str, sender: &str, session: &SessionToken) -> Option<SendMessage> {
  let text = text.trim();
  if text.is_empty() {
    return None;
  }

  let sender = match sender.trim() {
    "" => FALLBACK_SENDER,
    name => name,
  };

  Some(SendMessage {
    text: Some(text.to_owned()),
    sender: Some(sender.to_owned()),
    session_id: Some(session.as_str().to_owned()),
  })
}

/// HTTP client for the board endpoints.
#[derive(Debug, Clone)]
pub struct HubClient {
  inner: reqwest::Client,
  base_url: String,
}

impl HubClient {
  #[must_use]
  pub fn new(base_url: &str) -> Self {
    Self {
      inner: reqwest::Client::new(),
      base_url: base_url.trim_end_matches('/').to_owned(),
    }
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.base_url, path)
  }

  pub async fn get_messages(&self) -> Result<Vec<Message>, ClientError> {
    let url = self.url("/get_messages");
    debug!(url = %url, "GET request");

    let response = self.inner.get(&url).send().await?;
    if !response.status().is_success() {
      return Err(ClientError::Status {
        status: response.status(),
        path: "/get_messages".to_owned(),
      });
    }

    Ok(response.json().await?)
  }

  pub async fn send(&self, message: &SendMessage) -> Result<(), ClientError> {
    let url = self.url("/send");
    debug!(url = %url, "POST request");

    let response = self.inner.post(&url).json(message).send().await?;
    if !response.status().is_success() {
      return Err(ClientError::Status {
        status: response.status(),
        path: "/send".to_owned(),
      });
    }

    Ok(())
  }
}

impl MessageSource for HubClient {
  fn fetch(&self) -> impl Future<Output = Result<Vec<Message>, ClientError>> + Send {
    self.get_messages()
  }
}

impl MessageSink for HubClient {
  fn post(&self, message: &SendMessage) -> impl Future<Output = Result<(), ClientError>> + Send {
    self.send(message)
  }
}
