use std::fmt::Display;

use rand::Rng;

pub const SESSION_TOKEN_LEN: usize = 9;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Random per-client tag used to tell "my" messages apart. Not a credential.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
  #[must_use]
  pub fn generate() -> Self {
    let mut rng = rand::thread_rng();
    let token = (0..SESSION_TOKEN_LEN)
      .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
      .collect();
    Self(token)
  }

  #[must_use]
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Whether a message's `session_id` was produced by this token.
  #[must_use]
  pub fn owns(&self, session_id: Option<&str>) -> bool {
    session_id == Some(self.as_str())
  }
}

impl From<&str> for SessionToken {
  fn from(value: &str) -> Self {
    Self(value.to_owned())
  }
}

impl Display for SessionToken {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn generated_tokens_are_short_lowercase_alphanumerics() {
    let token = SessionToken::generate();
    assert_eq!(token.as_str().len(), SESSION_TOKEN_LEN);
    assert!(
      token
        .as_str()
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    );
  }

  #[test]
  fn generated_tokens_differ() {
    assert_ne!(SessionToken::generate(), SessionToken::generate());
  }

  #[test]
  fn owns_only_matching_session_ids() {
    let token = SessionToken::from("abc123");
    assert!(token.owns(Some("abc123")));
    assert!(!token.owns(Some("abc1234")));
    assert!(!token.owns(None));
  }
}
