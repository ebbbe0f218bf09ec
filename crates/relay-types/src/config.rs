//! Relay configuration types.
//!
//! `RelayConfig` represents the optional `relay.toml` that controls the
//! listen address, the model identifier and generation settings. All fields
//! have defaults (port 3001, `gemini-2.5-flash`), so an absent file and an
//! empty file behave the same.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";

/// Top-level configuration for the relay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Model identifier sent to the provider.
    #[serde(default = "default_model")]
    pub model: String,

    /// Provider API base URL (override for proxies and tests).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Name of the environment variable holding the provider API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Upper bound on a single provider call. `None` waits indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Sampling temperature; provider default when unset.
    #[serde(default)]
    pub temperature: Option<f64>,

    /// Output token cap; provider default when unset.
    #[serde(default)]
    pub max_output_tokens: Option<u32>,

    /// File whose contents replace the built-in persona.
    #[serde(default)]
    pub persona_file: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            model: default_model(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            request_timeout_secs: None,
            temperature: None,
            max_output_tokens: None,
            persona_file: None,
        }
    }
}

impl RelayConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Provider call timeout, if one is configured. Zero means none.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}
