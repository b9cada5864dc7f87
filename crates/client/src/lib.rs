//! Polling client for the hub message board.
//!
//! [`Poller`] fetches the whole board on a fixed interval and hands it to a
//! [`Reconciler`], which decides whether the [`Board`] needs a redraw and
//! marks which entries came from this client's [`SessionToken`].

mod board;
pub use board::{Board, BoardEntry, Ownership, TerminalBoard};

mod client;
pub use client::{HubClient, MessageSource, compose};

mod composer;
pub use composer::{Composer, MessageSink};

mod config;
pub use config::ClientConfig;

mod error;
pub use error::ClientError;

mod poller;
pub use poller::{PollState, Poller};

mod reconcile;
pub use reconcile::Reconciler;

mod session;
pub use session::{SESSION_TOKEN_LEN, SessionToken};
