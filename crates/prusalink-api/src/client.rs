// Hand-crafted async HTTP client for the Prusa Link local API.
//
// Auth: X-Api-Key header (static pre-shared key).
// One request per call: no retries, no caching, no session state.

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::printer::PrinterResponse;
use crate::transport::TransportConfig;

/// Async client for a single printer's Link API.
///
/// Configuration (endpoint, API key) is immutable after construction, so
/// concurrent calls from multiple tasks are safe and independent.
/// Cancellation is cooperative: drop the future, or wrap the call in a
/// deadline -- the configured transport timeout surfaces as
/// [`Error::Transport`].
#[derive(Debug)]
pub struct LinkClient {
    http: reqwest::Client,
    base_url: Url,
}

impl LinkClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from an endpoint, an optional API key, and transport config.
    ///
    /// When a non-empty key is given, `X-Api-Key` is injected as a default
    /// header on every request; otherwise the header is omitted entirely
    /// (never sent empty). `Content-Type: application/json` is always set.
    pub fn new(
        endpoint: &str,
        api_key: Option<&SecretString>,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));

        if let Some(key) = api_key.filter(|k| !k.expose_secret().is_empty()) {
            let mut key_value =
                HeaderValue::from_str(key.expose_secret()).map_err(|e| Error::Config {
                    message: format!("invalid API key header value: {e}"),
                })?;
            key_value.set_sensitive(true);
            headers.insert("X-Api-Key", key_value);
        }

        let http = transport.build_client_with_headers(headers)?;
        let base_url = Self::normalize_endpoint(endpoint)?;

        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client` (caller manages default headers).
    pub fn from_reqwest(endpoint: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_endpoint(endpoint)?;
        Ok(Self { http, base_url })
    }

    /// The normalized base URL (always ends with a single `/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Normalize the configured endpoint: strip trailing slashes, then
    /// re-append exactly one, so relative-path joins behave the same no
    /// matter how the caller wrote the endpoint.
    fn normalize_endpoint(raw: &str) -> Result<Url, Error> {
        let trimmed = raw.trim_end_matches('/');
        let url = Url::parse(&format!("{trimmed}/"))?;
        if url.cannot_be_a_base() {
            return Err(Error::Config {
                message: format!("endpoint is not a base URL: {raw}"),
            });
        }
        Ok(url)
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path onto the base URL.
    ///
    /// The leading slash is trimmed so resolution stays *under* the base
    /// path (`/api/` + `/printer` → `/api/printer`, not `/printer`).
    fn url(&self, path: &str) -> Url {
        self.base_url
            .join(path.trim_start_matches('/'))
            .expect("path should be a valid relative URL")
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path);
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        Self::handle_response(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    /// Classify the response: any status below 400 is a success and the
    /// body is decoded as JSON; 400..=599 becomes [`Error::Api`] with the
    /// numeric code only. Error bodies are never parsed -- the firmware
    /// does not guarantee an error schema.
    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        if status.as_u16() >= 400 {
            return Err(Error::Api {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            let preview = body_preview(&body);
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Fetch the raw printer status payload from `GET /printer`.
    pub async fn get_printer(&self) -> Result<PrinterResponse, Error> {
        self.get("printer").await
    }
}

/// Truncate a response body to at most 200 bytes for error messages,
/// backing up to the nearest char boundary so multibyte bodies never
/// panic the slice.
fn body_preview(body: &str) -> &str {
    let mut cut = body.len().min(200);
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    &body[..cut]
}
