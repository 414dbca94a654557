use thiserror::Error;

/// Top-level error type for the `prusalink-api` crate.
///
/// Keeps the four failure classes a caller needs to tell apart:
/// configuration problems, transport failures, HTTP-level rejections,
/// and responses that decoded badly. `prusalink-core` maps these into
/// user-facing variants.
#[derive(Debug, Error)]
pub enum Error {
    // ── Configuration ───────────────────────────────────────────────
    /// The configured base endpoint is unusable (detected at construction).
    #[error("Invalid endpoint configuration: {message}")]
    Config { message: String },

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout,
    /// cancellation).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    // ── API ─────────────────────────────────────────────────────────
    /// The printer answered with HTTP 400..=599.
    ///
    /// Error bodies are not parsed -- Prusa Link firmware revisions do not
    /// agree on an error schema, so only the status code is carried.
    #[error("Link API error (HTTP {status})")]
    Api { status: u16 },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this is a transient error worth retrying
    /// by a calling layer (this crate never retries on its own).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// Extract the HTTP status code, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
