mod message_store;
pub use message_store::{MESSAGE_CAPACITY, MessageStore};
