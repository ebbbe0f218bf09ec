//! Secret provider trait definition.

/// Source of secret values (API keys) resolved at startup.
///
/// Implementations live in relay-infra (e.g., `EnvSecretProvider`). Lookups
/// are synchronous: every backend in use reads process-local state.
pub trait SecretProvider: Send + Sync {
    /// Retrieve a secret value by key.
    /// Returns `None` if the secret does not exist in this provider.
    fn get(&self, key: &str) -> Option<String>;
}
