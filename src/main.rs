use hub_core::MessageStore;
use hub_server::server;
use hub_shared::AppError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
  dotenvy::dotenv().ok();
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
          "{}=debug,hub_server=debug,hub_core=debug,tower_http=debug",
          env!("CARGO_CRATE_NAME")
        )
        .into()
      }),
    )
    .with(tracing_subscriber::fmt::layer())
    .with(tracing_error::ErrorLayer::default())
    .init();

  let store = MessageStore::new();
  tracing::debug!(capacity = store.capacity(), "message store ready");

  server(store).await
}
