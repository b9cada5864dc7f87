use std::{collections::VecDeque, sync::Arc};

use hub_shared::Message;
use tokio::sync::RwLock;

/// How many messages the board keeps before evicting the oldest.
pub const MESSAGE_CAPACITY: usize = 50;

/// Bounded, insertion-ordered message log.
///
/// Cloning yields another handle to the same log. Each `append` pushes and
/// evicts under one write guard, so readers never see more than `capacity`
/// entries.
#[derive(Clone, Debug)]
pub struct MessageStore {
  messages: Arc<RwLock<VecDeque<Message>>>,
  capacity: usize,
}

impl Default for MessageStore {
  fn default() -> Self {
    Self::new()
  }
}

impl MessageStore {
  #[must_use]
  pub fn new() -> Self {
    Self::with_capacity(MESSAGE_CAPACITY)
  }

  /// A zero capacity is treated as one.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    let capacity = capacity.max(1);
    Self {
      messages: Arc::new(RwLock::new(VecDeque::with_capacity(capacity + 1))),
      capacity,
    }
  }

  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }

  pub async fn append(&self, message: Message) {
    let mut messages = self.messages.write().await;
    messages.push_back(message);

    while messages.len() > self.capacity {
      messages.pop_front();
      tracing::trace!(capacity = self.capacity, "evicted oldest message");
    }
  }

  /// Snapshot of every stored message, oldest first.
  pub async fn list_all(&self) -> Vec<Message> {
    self.messages.read().await.iter().cloned().collect()
  }

  pub async fn len(&self) -> usize {
    self.messages.read().await.len()
  }

  pub async fn is_empty(&self) -> bool {
    self.messages.read().await.is_empty()
  }
}
