// ── Core error types ──
//
// User-facing errors from prusalink-core. The `From<prusalink_api::Error>`
// impl translates transport-layer failures into domain-appropriate
// variants; classification itself never produces an error -- normalization
// is total given a structurally valid payload.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Cannot connect to printer at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Request to printer timed out")]
    Timeout,

    /// The printer rejected the request (HTTP status >= 400).
    #[error("Printer API error (HTTP {status})")]
    Api { status: u16 },

    /// The printer sent a body this client could not make sense of.
    #[error("Unexpected response from printer: {message}")]
    UnexpectedResponse { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<prusalink_api::Error> for CoreError {
    fn from(err: prusalink_api::Error) -> Self {
        match err {
            prusalink_api::Error::Config { message } => CoreError::Config { message },
            prusalink_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("invalid URL: {e}"),
            },
            prusalink_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map(ToString::to_string)
                            .unwrap_or_else(|| "<unknown>".into()),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Internal(e.to_string())
                }
            }
            prusalink_api::Error::Api { status } => CoreError::Api { status },
            prusalink_api::Error::Deserialization { message, body: _ } => {
                CoreError::UnexpectedResponse { message }
            }
        }
    }
}
