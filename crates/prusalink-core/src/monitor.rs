// ── Monitor facade ──
//
// The high-level entry point for consumers: one authenticated round-trip
// to the printer, normalized into a `Printer` snapshot. Deliberately
// stateless -- no caching, no background refresh, no retry. Callers that
// want polling or backoff build it on top.

use secrecy::SecretString;
use tracing::debug;

use prusalink_api::{LinkClient, TransportConfig};

use crate::error::CoreError;
use crate::model::Printer;

/// Facade over [`LinkClient`] producing normalized snapshots.
///
/// Immutable after construction; safe to share across tasks (concurrent
/// calls are independent, no shared mutable state is written during a
/// request).
#[derive(Debug)]
pub struct Monitor {
    client: LinkClient,
}

impl Monitor {
    /// Wrap an existing [`LinkClient`].
    pub fn new(client: LinkClient) -> Self {
        Self { client }
    }

    /// Build a client from endpoint + optional API key and wrap it.
    pub fn connect(
        endpoint: &str,
        api_key: Option<&SecretString>,
        transport: &TransportConfig,
    ) -> Result<Self, CoreError> {
        let client = LinkClient::new(endpoint, api_key, transport)?;
        Ok(Self::new(client))
    }

    /// Fetch the current printer snapshot.
    ///
    /// Exactly one network round-trip: GET the raw status payload, then
    /// normalize it. Cancellation is cooperative -- drop the returned
    /// future or wrap the call in `tokio::time::timeout`.
    pub async fn printer(&self) -> Result<Printer, CoreError> {
        let response = self.client.get_printer().await?;
        let printer = Printer::from(response);
        debug!(state = ?printer.state, tools = printer.tool_count, "printer snapshot");
        Ok(printer)
    }
}
