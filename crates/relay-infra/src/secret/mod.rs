//! Secret provider implementations and the startup credential check.
//!
//! - `env`: Environment variable provider (read-only)

pub mod env;

use secrecy::SecretString;

use relay_core::secret::SecretProvider;
use relay_types::error::ConfigError;

/// Resolve a required secret, failing if it is absent or empty.
///
/// A missing provider credential is startup-fatal: callers propagate the
/// error out of `main` before any listener is bound.
pub fn require_secret(provider: &impl SecretProvider, key: &str) -> Result<SecretString, ConfigError> {
    match provider.get(key) {
        Some(value) if !value.trim().is_empty() => Ok(SecretString::from(value)),
        _ => Err(ConfigError::MissingSecret(key.to_string())),
    }
}
