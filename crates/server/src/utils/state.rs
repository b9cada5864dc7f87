use hub_core::MessageStore;

#[derive(Clone, Debug)]
pub struct AppState {
  pub store: MessageStore,
}

impl AppState {
  #[must_use]
  pub const fn new(store: MessageStore) -> Self {
    Self { store }
  }
}
