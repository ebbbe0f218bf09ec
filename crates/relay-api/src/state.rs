//! Application state wiring the relay together.
//!
//! AppState holds the one `ChatRelay` shared by every request. `init` pins it
//! to the Gemini provider and the environment credential; tests build it
//! from any provider with `from_relay`.

use std::sync::Arc;

use relay_core::chat::relay::{ChatRelay, RelayOptions};
use relay_core::llm::box_provider::BoxLlmProvider;
use relay_infra::config::load_persona;
use relay_infra::llm::gemini::GeminiProvider;
use relay_infra::secret::env::EnvSecretProvider;
use relay_infra::secret::require_secret;
use relay_types::config::RelayConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<ChatRelay>,
}

impl AppState {
    /// Resolve the credential and persona, then build the Gemini-backed relay.
    ///
    /// Fails without touching the network if the API key is missing.
    pub async fn init(config: &RelayConfig) -> anyhow::Result<Self> {
        let api_key = require_secret(&EnvSecretProvider::new(), &config.api_key_env)?;
        let persona = load_persona(config).await?;

        let provider = GeminiProvider::new(api_key).with_base_url(config.base_url.as_str());
        let relay = ChatRelay::new(
            BoxLlmProvider::new(provider),
            Arc::new(persona),
            RelayOptions::from_config(config),
        );

        Ok(Self::from_relay(relay))
    }

    pub fn from_relay(relay: ChatRelay) -> Self {
        Self {
            relay: Arc::new(relay),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_types::error::ConfigError;

    #[tokio::test]
    async fn init_fails_without_api_key() {
        let config = RelayConfig {
            api_key_env: "RELAY_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            ..RelayConfig::default()
        };
        let err = AppState::init(&config).await.err().expect("init must fail");
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::MissingSecret(key)) if key == "RELAY_TEST_KEY_THAT_IS_NEVER_SET"
        ));
    }

    #[tokio::test]
    async fn init_builds_relay_from_config() {
        // SAFETY: The variable name is unique to this test and removed below.
        unsafe { std::env::set_var("RELAY_TEST_STATE_KEY", "k-123") };

        let config = RelayConfig {
            api_key_env: "RELAY_TEST_STATE_KEY".to_string(),
            model: "gemini-2.5-pro".to_string(),
            ..RelayConfig::default()
        };
        let state = AppState::init(&config).await.unwrap();
        assert_eq!(state.relay.provider_name(), "gemini");
        assert_eq!(state.relay.options().model, "gemini-2.5-pro");
        assert!(state.relay.persona().text().contains("Vinicius"));

        // SAFETY: The var was just set above and no other test reads it.
        unsafe { std::env::remove_var("RELAY_TEST_STATE_KEY") };
    }
}
