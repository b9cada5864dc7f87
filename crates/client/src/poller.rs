use std::{sync::Arc, time::Duration};

use tokio::{sync::Notify, time::MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::{Board, MessageSource, Reconciler};

/// Whether a fetch is currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollState {
  #[default]
  Idle,
  Fetching,
}

impl PollState {
  /// Move to `Fetching`. Returns `false` if a fetch is already running.
  pub fn begin(&mut self) -> bool {
    match self {
      Self::Idle => {
        *self = Self::Fetching;
        true
      }
      Self::Fetching => false,
    }
  }

  pub fn finish(&mut self) {
    *self = Self::Idle;
  }
}

/// Periodically pulls the board and redraws it when it grew.
pub struct Poller<S> {
  source: S,
  reconciler: Reconciler,
  interval: Duration,
  state: PollState,
  refresh: Arc<Notify>,
  cancel: CancellationToken,
}

impl<S: MessageSource> Poller<S> {
  pub fn new(
    source: S,
    reconciler: Reconciler,
    interval: Duration,
    cancel: CancellationToken,
  ) -> Self {
    Self {
      source,
      reconciler,
      interval,
      state: PollState::Idle,
      refresh: Arc::new(Notify::new()),
      cancel,
    }
  }

  /// Handle for requesting a poll ahead of the next tick, e.g. right after
  /// sending.
  #[must_use]
  pub fn refresh_handle(&self) -> Arc<Notify> {
    Arc::clone(&self.refresh)
  }

  #[must_use]
  pub const fn state(&self) -> PollState {
    self.state
  }

  /// Poll until cancelled. The first poll happens immediately.
  ///
  /// Each fetch is awaited before the next tick is taken, and ticks missed
  /// meanwhile are skipped, so fetches never overlap.
  pub async fn run<B: Board>(mut self, board: &mut B) {
    let mut ticker = tokio::time::interval(self.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    info!(interval_ms = self.interval.as_millis(), "polling started");

    loop {
      tokio::select! {
        () = self.cancel.cancelled() => break,
        _ = ticker.tick() => {}
        () = self.refresh.notified() => debug!("refresh requested"),
      }

      if !self.poll_once(board).await {
        break;
      }
    }

    info!("polling stopped");
  }

  /// One idle → fetching → idle cycle. Returns `false` if cancelled mid-fetch.
  async fn poll_once<B: Board>(&mut self, board: &mut B) -> bool {
    let started = self.state.begin();
    debug_assert!(started, "poll started while a fetch was in flight");

    let outcome = tokio::select! {
      () = self.cancel.cancelled() => None,
      result = self.source.fetch() => Some(result),
    };
    self.state.finish();

    match outcome {
      None => false,
      Some(Ok(messages)) => {
        if let Some(view) = self.reconciler.reconcile(&messages) {
          debug!(count = view.len(), "redrawing board");
          board.redraw(&view);
        }
        true
      }
      Some(Err(err)) => {
        warn!(error = %err, "failed to fetch messages");
        true
      }
    }
  }
}
