use std::env;
use std::sync::LazyLock;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

pub struct AppEnv {
  pub bind_addr: String,
}

impl AppEnv {
  fn new() -> Self {
    Self {
      bind_addr: env::var("HUB_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned()),
    }
  }
}

/// Read once on first access, so load `.env` before touching it.
pub static APP_ENV: LazyLock<AppEnv> = LazyLock::new(AppEnv::new);
