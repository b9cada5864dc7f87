use std::{env, time::Duration};

const DEFAULT_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_SENDER: &str = "Anon";
const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
  /// Board server base URL.
  pub url: String,

  /// Name attached to outgoing messages.
  pub sender: String,

  /// Delay between polls.
  pub poll_interval: Duration,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      url: DEFAULT_URL.to_owned(),
      sender: DEFAULT_SENDER.to_owned(),
      poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
    }
  }
}

impl ClientConfig {
  /// Read `HUB_URL`, `HUB_SENDER` and `HUB_POLL_INTERVAL_MS`, falling back to
  /// defaults for anything unset or unparsable.
  #[must_use]
  pub fn from_env() -> Self {
    Self::from_lookup(|key| env::var(key).ok())
  }

  fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
    let defaults = Self::default();

    let poll_interval = lookup("HUB_POLL_INTERVAL_MS")
      .and_then(|raw| raw.trim().parse::<u64>().ok())
      .filter(|ms| *ms > 0)
      .map_or(defaults.poll_interval, Duration::from_millis);

    Self {
      url: lookup("HUB_URL").unwrap_or(defaults.url),
      sender: lookup("HUB_SENDER").unwrap_or(defaults.sender),
      poll_interval,
    }
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use super::*;

  #[test]
  fn falls_back_to_defaults() {
    let config = ClientConfig::from_lookup(|_| None);
    assert_eq!(config.url, DEFAULT_URL);
    assert_eq!(config.sender, "Anon");
    assert_eq!(config.poll_interval, Duration::from_secs(1));
  }

  #[test]
  fn reads_overrides() {
    let vars = HashMap::from([
      ("HUB_URL", "http://board:9000"),
      ("HUB_SENDER", "Bob"),
      ("HUB_POLL_INTERVAL_MS", "250"),
    ]);
    let config = ClientConfig::from_lookup(|key| vars.get(key).map(|v| (*v).to_owned()));

    assert_eq!(config.url, "http://board:9000");
    assert_eq!(config.sender, "Bob");
    assert_eq!(config.poll_interval, Duration::from_millis(250));
  }

  #[test]
  fn ignores_bad_interval() {
    for raw in ["soon", "0", "-5"] {
      let config = ClientConfig::from_lookup(|key| {
        (key == "HUB_POLL_INTERVAL_MS").then(|| raw.to_owned())
      });
      assert_eq!(config.poll_interval, Duration::from_secs(1), "{raw}");
    }
  }
}
