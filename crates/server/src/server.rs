use axum::{Router, response::Html, routing::get};
use hub_core::MessageStore;
use hub_shared::{APP_ENV, AppError};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{
  api,
  utils::{AppState, shutdown_signal},
};

const INDEX_HTML: &str = include_str!("../assets/index.html");

#[axum::debug_handler]
async fn index() -> Html<&'static str> {
  Html(INDEX_HTML)
}

pub fn router(store: MessageStore) -> Router {
  Router::new()
    .route("/", get(index))
    .merge(api::app())
    .layer(TraceLayer::new_for_http())
    .with_state(AppState::new(store))
}

pub async fn server(store: MessageStore) -> Result<(), AppError> {
  let app = router(store);

  let listener = TcpListener::bind(APP_ENV.bind_addr.as_str()).await?;

  tracing::info!("server started at http://{}", listener.local_addr()?);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  tracing::info!("server stopped");

  Ok(())
}
