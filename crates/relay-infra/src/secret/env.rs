//! Environment variable secret provider.
//!
//! A read-only secret provider that checks environment variables. Values
//! loaded from a `.env` file by `dotenvy` at startup are visible here too,
//! since `dotenvy` populates the process environment.

use relay_core::secret::SecretProvider;

/// Environment variable secret provider.
pub struct EnvSecretProvider;

impl EnvSecretProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvSecretProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretProvider for EnvSecretProvider {
    fn get(&self, key: &str) -> Option<String> {
        match std::env::var(key) {
            Ok(val) => Some(val),
            Err(std::env::VarError::NotPresent) => None,
            Err(std::env::VarError::NotUnicode(_)) => {
                // Env var exists but has invalid Unicode -- treat as not found
                // rather than erroring, since secrets must be valid strings
                None
            }
        }
    }
}
