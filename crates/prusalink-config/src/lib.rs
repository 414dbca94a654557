//! Configuration for prusalink clients.
//!
//! TOML file + `PRUSALINK_`-prefixed environment variables, with an
//! API-key resolution chain (named env var, then plaintext config).
//! The key is optional: a printer with Link auth disabled needs none,
//! and the client then omits the auth header entirely.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use prusalink_api::{LinkClient, TransportConfig};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("client construction failed: {0}")]
    Client(#[from] prusalink_api::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Config struct ───────────────────────────────────────────────────

/// Construction-time configuration for a single printer.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Base endpoint of the Link API (e.g. "http://mini-1.local/api").
    /// Trailing slashes are normalized by the client.
    pub endpoint: Option<String>,

    /// API key (plaintext -- prefer `api_key_env`).
    pub api_key: Option<String>,

    /// Environment variable name containing the API key.
    pub api_key_env: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            api_key_env: None,
            timeout: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "prusalink", "prusalink").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("prusalink");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load configuration from an explicit file path + environment.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("PRUSALINK_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load configuration from the canonical path + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to the given path.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

/// Serialize config to TOML at the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

// ── Credential resolution ───────────────────────────────────────────

/// Resolve the API key: named env var first, plaintext config second.
///
/// `None` means no key is configured -- the client will not send the
/// auth header at all.
pub fn resolve_api_key(config: &Config) -> Option<SecretString> {
    if let Some(ref env_name) = config.api_key_env {
        if let Ok(val) = std::env::var(env_name) {
            return Some(SecretString::from(val));
        }
    }

    config
        .api_key
        .as_ref()
        .map(|key| SecretString::from(key.clone()))
}

// ── Client construction ─────────────────────────────────────────────

/// Build a [`LinkClient`] from resolved configuration.
pub fn build_client(config: &Config) -> Result<LinkClient, ConfigError> {
    let endpoint = config
        .endpoint
        .as_deref()
        .ok_or_else(|| ConfigError::Validation {
            field: "endpoint".into(),
            reason: "no printer endpoint configured".into(),
        })?;

    let api_key = resolve_api_key(config);
    let transport = TransportConfig {
        timeout: Duration::from_secs(config.timeout),
    };

    Ok(LinkClient::new(endpoint, api_key.as_ref(), &transport)?)
}
