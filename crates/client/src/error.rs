use reqwest::StatusCode;
use thiserror::Error;

/// Errors talking to the board server.
#[derive(Debug, Error)]
pub enum ClientError {
  /// Transport or body decoding failure.
  #[error("HTTP error: {0}")]
  Http(#[from] reqwest::Error),

  /// Server answered with a non-success status.
  #[error("HTTP {status}: {path}")]
  Status { status: StatusCode, path: String },
}
