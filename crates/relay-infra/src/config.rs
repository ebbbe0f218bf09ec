//! Configuration loader for the relay.
//!
//! Reads an optional `relay.toml` and deserializes it into [`RelayConfig`].
//! A file named explicitly (`--config`) must exist and parse; the implicit
//! `./relay.toml` falls back to defaults when missing or malformed.

use std::path::Path;

use relay_types::config::RelayConfig;
use relay_types::error::ConfigError;
use relay_types::persona::PersonaConfig;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "relay.toml";

/// Load relay configuration.
///
/// - `Some(path)`: read errors and parse errors are returned.
/// - `None`: `./relay.toml` is used if present; otherwise, or if it fails to
///   parse, a warning is logged and [`RelayConfig::default()`] is returned.
pub async fn load_relay_config(path: Option<&Path>) -> Result<RelayConfig, ConfigError> {
    match path {
        Some(path) => read_config(path).await,
        None => Ok(load_default_config(Path::new(DEFAULT_CONFIG_FILE)).await),
    }
}

async fn read_config(path: &Path) -> Result<RelayConfig, ConfigError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    toml::from_str::<RelayConfig>(&content).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

async fn load_default_config(path: &Path) -> RelayConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No {} found, using defaults", path.display());
            return RelayConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return RelayConfig::default();
        }
    };

    match toml::from_str::<RelayConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            RelayConfig::default()
        }
    }
}

/// Resolve the persona: the configured file if any, else the built-in text.
pub async fn load_persona(config: &RelayConfig) -> Result<PersonaConfig, ConfigError> {
    let Some(path) = &config.persona_file else {
        return Ok(PersonaConfig::builtin());
    };

    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    let persona = PersonaConfig::from_text(text)?;
    tracing::info!(path = %path.display(), "loaded persona from file");
    Ok(persona)
}
