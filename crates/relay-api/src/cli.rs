//! CLI definition for the `tutor-relay` binary.
//!
//! Every flag falls back to an environment variable, so a `.env` file (loaded
//! before parsing) can configure the relay without arguments. Flags override
//! values from `relay.toml`.

use std::path::PathBuf;

use clap::Parser;

use relay_types::config::RelayConfig;

/// Relay chat turns from a front-end to Gemini without exposing the API key.
#[derive(Debug, Parser)]
#[command(name = "tutor-relay", version, about, long_about = None)]
pub struct Cli {
    /// Path to a relay.toml config file (default: ./relay.toml if present).
    #[arg(long, env = "RELAY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Interface to bind.
    #[arg(long, env = "RELAY_HOST")]
    pub host: Option<String>,

    /// Port to bind.
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Gemini model identifier.
    #[arg(long, env = "RELAY_MODEL")]
    pub model: Option<String>,

    /// File whose contents replace the built-in persona.
    #[arg(long, env = "RELAY_PERSONA_FILE")]
    pub persona_file: Option<PathBuf>,

    /// Abort a model call after this many seconds (0 = never).
    #[arg(long, env = "RELAY_REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,

    /// Export spans to stdout via OpenTelemetry.
    #[arg(long)]
    pub otel: bool,

    /// Suppress all output except errors.
    #[arg(long)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Apply flag/env overrides on top of file configuration.
    pub fn apply_overrides(&self, config: &mut RelayConfig) {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(path) = &self.persona_file {
            config.persona_file = Some(path.clone());
        }
        if let Some(secs) = self.request_timeout_secs {
            config.request_timeout_secs = Some(secs);
        }
    }
}
