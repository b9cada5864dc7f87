use hub_client::{
  ClientConfig, Composer, HubClient, Poller, Reconciler, SessionToken, TerminalBoard,
};
use tokio::io::BufReader;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
  dotenvy::dotenv().ok();
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
    )
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .with(tracing_error::ErrorLayer::default())
    .init();

  let config = ClientConfig::from_env();
  let session = SessionToken::generate();
  let client = HubClient::new(&config.url);
  let cancel = CancellationToken::new();

  tracing::info!(url = %config.url, sender = %config.sender, %session, "joining board");

  // One listener for the whole session; it outlives every read and send.
  tokio::spawn({
    let cancel = cancel.clone();
    async move {
      match tokio::signal::ctrl_c().await {
        Ok(()) => {
          tracing::info!("interrupted");
          cancel.cancel();
        }
        Err(err) => tracing::error!(error = %err, "failed to install Ctrl+C handler"),
      }
    }
  });

  let poller = Poller::new(
    client.clone(),
    Reconciler::new(session.clone()),
    config.poll_interval,
    cancel.clone(),
  );
  let composer = Composer::new(client, config.sender, session, poller.refresh_handle());
  let polling = tokio::spawn(async move {
    let mut board = TerminalBoard::stdout();
    poller.run(&mut board).await;
  });

  composer
    .run(BufReader::new(tokio::io::stdin()), &cancel)
    .await;

  cancel.cancel();
  if let Err(err) = polling.await {
    tracing::error!(error = %err, "polling task failed");
  }

  // A pending stdin read holds a blocking thread that runtime shutdown would
  // wait on until the next newline.
  std::process::exit(0);
}
