use std::sync::Arc;

use hub_shared::SendMessage;
use tokio::{
  io::{AsyncBufRead, AsyncBufReadExt},
  sync::Notify,
};
use tokio_util::sync::CancellationToken;
use tracing::{error, warn};

use crate::{ClientError, SessionToken, compose};

/// Anything outgoing messages can be posted to.
pub trait MessageSink {
  fn post(&self, message: &SendMessage) -> impl Future<Output = Result<(), ClientError>> + Send;
}

/// Turns input lines into posted messages.
pub struct Composer<K> {
  sink: K,
  sender: String,
  session: SessionToken,
  refresh: Arc<Notify>,
}

impl<K: MessageSink> Composer<K> {
  pub const fn new(sink: K, sender: String, session: SessionToken, refresh: Arc<Notify>) -> Self {
    Self {
      sink,
      sender,
      session,
      refresh,
    }
  }

  /// Post one message per line until input ends or `cancel` fires.
  ///
  /// Both reading and posting race `cancel`, so a stalled server cannot hold
  /// the loop past shutdown.
  pub async fn run<R: AsyncBufRead + Unpin>(&self, input: R, cancel: &CancellationToken) {
    let mut lines = input.lines();

    loop {
      let line = tokio::select! {
        () = cancel.cancelled() => break,
        line = lines.next_line() => line,
      };

      let line = match line {
        Ok(Some(line)) => line,
        Ok(None) => break,
        Err(err) => {
          error!(error = %err, "failed to read input");
          break;
        }
      };

      let Some(message) = compose(&line, &self.sender, &self.session) else {
        continue;
      };

      let sent = tokio::select! {
        () = cancel.cancelled() => break,
        sent = self.sink.post(&message) => sent,
      };
      match sent {
        Ok(()) => self.refresh.notify_one(),
        Err(err) => warn!(error = %err, "failed to send message"),
      }
    }
  }
}
