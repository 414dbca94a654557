// Shared transport configuration for building reqwest::Client instances.
//
// The Link API is plain HTTP on the local network, so there is no TLS
// knob here -- just the request timeout and the default-header plumbing
// the client uses to attach authentication.

use std::time::Duration;

/// Transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` with the given default headers.
    ///
    /// Used by `LinkClient` to inject `X-Api-Key` and `Content-Type`.
    pub fn build_client_with_headers(
        &self,
        headers: reqwest::header::HeaderMap,
    ) -> Result<reqwest::Client, crate::error::Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent("prusalink-rs/0.1.0")
            .default_headers(headers)
            .build()
            .map_err(|e| crate::error::Error::Config {
                message: format!("failed to build HTTP client: {e}"),
            })
    }
}
