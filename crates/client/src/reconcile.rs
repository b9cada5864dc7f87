use hub_shared::Message;

use crate::{BoardEntry, Ownership, SessionToken};

/// Tracks how much of the board has been drawn.
///
/// Only a response with more messages than last drawn produces a view. Once
/// the server's bounded log is full the count stops growing, so later
/// messages are not redrawn until the count rises again.
#[derive(Debug)]
pub struct Reconciler {
  session: SessionToken,
  last_count: usize,
}

impl Reconciler {
  #[must_use]
  pub const fn new(session: SessionToken) -> Self {
    Self {
      session,
      last_count: 0,
    }
  }

  #[must_use]
  pub const fn last_count(&self) -> usize {
    self.last_count
  }

  #[must_use]
  pub const fn session(&self) -> &SessionToken {
    &self.session
  }

  /// Returns the full rebuilt view when `messages` grew, `None` otherwise.
  pub fn reconcile(&mut self, messages: &[Message]) -> Option<Vec<BoardEntry>> {
    if messages.len() <= self.last_count {
      return None;
    }

    self.last_count = messages.len();
    Some(messages.iter().map(|m| self.classify(m)).collect())
  }

  fn classify(&self, message: &Message) -> BoardEntry {
    let ownership = if self.session.owns(message.session_id.as_deref()) {
      Ownership::Mine
    } else {
      Ownership::Others
    };

    BoardEntry {
      ownership,
      message: message.clone(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn message(text: &str, session_id: Option<&str>) -> Message {
    Message {
      text: Some(text.to_owned()),
      sender: Some("Bob".to_owned()),
      session_id: session_id.map(str::to_owned),
      time: "08:15".to_owned(),
    }
  }

  #[test]
  fn empty_board_draws_nothing() {
    let mut reconciler = Reconciler::new(SessionToken::from("me"));
    assert_eq!(reconciler.reconcile(&[]), None);
    assert_eq!(reconciler.last_count(), 0);
  }

  #[test]
  fn redraws_only_when_count_grows() {
    let mut reconciler = Reconciler::new(SessionToken::from("me"));
    let first = vec![message("a", Some("me"))];
    let second = vec![message("a", Some("me")), message("b", Some("you"))];

    assert_eq!(reconciler.reconcile(&first).map(|v| v.len()), Some(1));
    assert_eq!(reconciler.reconcile(&first), None);
    assert_eq!(reconciler.reconcile(&second).map(|v| v.len()), Some(2));
    assert_eq!(reconciler.last_count(), 2);

    // Same size, different content: still a no-op.
    let shifted = vec![message("b", Some("you")), message("c", None)];
    assert_eq!(reconciler.reconcile(&shifted), None);
  }

  #[test]
  fn classifies_by_session_token() {
    let mut reconciler = Reconciler::new(SessionToken::from("me"));
    let view = reconciler
      .reconcile(&[
        message("mine", Some("me")),
        message("theirs", Some("you")),
        message("anonymous", None),
      ])
      .unwrap();

    let ownership: Vec<Ownership> = view.iter().map(|e| e.ownership).collect();
    assert_eq!(
      ownership,
      [Ownership::Mine, Ownership::Others, Ownership::Others]
    );
    assert_eq!(view[1].message.text.as_deref(), Some("theirs"));
  }
}
