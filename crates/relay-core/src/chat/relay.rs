//! The chat-turn relay.
//!
//! `ChatRelay` owns the persona, the provider handle and the per-call
//! options. It is built once at startup and shared (read-only) by every
//! request. Each call runs validate -> normalize -> invoke -> extract and
//! either returns the reply text or a [`RelayError`].

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use relay_types::chat::ChatTurn;
use relay_types::config::RelayConfig;
use relay_types::error::ValidationError;
use relay_types::llm::{CompletionRequest, LlmError, Message};
use relay_types::persona::PersonaConfig;

use super::validate::validate_turn;
use crate::llm::box_provider::BoxLlmProvider;

/// Failure of a single relayed turn.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The request body was rejected; no provider call was made.
    #[error("invalid chat turn: {0}")]
    Validation(#[from] ValidationError),

    /// The provider call failed for any reason.
    #[error("model invocation failed: {0}")]
    Provider(#[from] LlmError),
}

/// Per-call settings applied to every model invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayOptions {
    pub model: String,
    pub temperature: Option<f64>,
    pub max_output_tokens: Option<u32>,
    /// Upper bound on the provider call; `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl RelayOptions {
    pub fn from_config(config: &RelayConfig) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
            timeout: config.request_timeout(),
        }
    }
}

impl Default for RelayOptions {
    fn default() -> Self {
        Self::from_config(&RelayConfig::default())
    }
}

/// Validates, normalizes and forwards chat turns to the model.
pub struct ChatRelay {
    provider: BoxLlmProvider,
    persona: Arc<PersonaConfig>,
    options: RelayOptions,
}

impl ChatRelay {
    pub fn new(provider: BoxLlmProvider, persona: Arc<PersonaConfig>, options: RelayOptions) -> Self {
        Self {
            provider,
            persona,
            options,
        }
    }

    /// Persona text sent as the system instruction on every call.
    pub fn persona(&self) -> &PersonaConfig {
        &self.persona
    }

    /// Model and generation settings applied to every call.
    pub fn options(&self) -> &RelayOptions {
        &self.options
    }

    /// Name of the wrapped provider, for logs.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Handle one raw request body end to end.
    pub async fn handle(&self, body: &Value) -> Result<String, RelayError> {
        let turn = validate_turn(body).inspect_err(|e| {
            tracing::debug!(error = %e, "rejected chat turn");
        })?;
        self.relay(turn).await
    }

    /// Invoke the model for an already validated turn and return its text.
    #[tracing::instrument(
        name = "chat",
        skip_all,
        fields(
            gen_ai.provider.name = self.provider.name(),
            gen_ai.request.model = %self.options.model,
        )
    )]
    pub async fn relay(&self, turn: ChatTurn) -> Result<String, RelayError> {
        let request = self.build_request(turn);
        tracing::debug!(
            provider = self.provider.name(),
            model = %request.model,
            messages = request.messages.len(),
            "invoking model"
        );

        let result = match self.options.timeout {
            Some(limit) => tokio::time::timeout(limit, self.provider.complete(&request))
                .await
                .unwrap_or(Err(LlmError::Timeout(limit.as_secs()))),
            None => self.provider.complete(&request).await,
        };

        match result {
            Ok(response) => {
                tracing::debug!(
                    input_tokens = response.usage.input_tokens,
                    output_tokens = response.usage.output_tokens,
                    "model replied"
                );
                Ok(response.content)
            }
            Err(e) => {
                tracing::error!(provider = self.provider.name(), error = %e, "model invocation failed");
                Err(RelayError::Provider(e))
            }
        }
    }

    /// Assemble the model invocation: persona + history + new user turn.
    pub fn build_request(&self, turn: ChatTurn) -> CompletionRequest {
        let mut messages = turn.history;
        messages.push(Message::user(turn.message));

        CompletionRequest {
            model: self.options.model.clone(),
            messages,
            system: Some(self.persona.text().to_string()),
            max_tokens: self.options.max_output_tokens,
            temperature: self.options.temperature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::provider::LlmProvider;
    use relay_types::llm::{CompletionResponse, Usage};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    // --- Mock provider ---

    #[derive(Clone)]
    enum MockResult {
        Reply(String),
        Fail,
    }

    #[derive(Clone)]
    struct MockProvider {
        result: MockResult,
        delay: Option<Duration>,
        calls: Arc<AtomicUsize>,
        last_request: Arc<Mutex<Option<CompletionRequest>>>,
    }

    impl MockProvider {
        fn replying(text: &str) -> Self {
            Self {
                result: MockResult::Reply(text.to_string()),
                delay: None,
                calls: Arc::new(AtomicUsize::new(0)),
                last_request: Arc::new(Mutex::new(None)),
            }
        }

        fn failing() -> Self {
            Self {
                result: MockResult::Fail,
                ..Self::replying("")
            }
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn last_request(&self) -> CompletionRequest {
            self.last_request.lock().unwrap().clone().expect("no request recorded")
        }
    }

    impl LlmProvider for MockProvider {
        fn name(&self) -> &str {
            "mock"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(request.clone());
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            match &self.result {
                MockResult::Reply(text) => Ok(CompletionResponse {
                    content: text.clone(),
                    model: request.model.clone(),
                    finish_reason: Some("STOP".to_string()),
                    usage: Usage::default(),
                }),
                MockResult::Fail => Err(LlmError::Provider {
                    message: "HTTP 500: backend exploded".to_string(),
                }),
            }
        }
    }

    fn relay_with(mock: &MockProvider, options: RelayOptions) -> ChatRelay {
        ChatRelay::new(
            BoxLlmProvider::new(mock.clone()),
            Arc::new(PersonaConfig::from_text("You are a tutor.").unwrap()),
            options,
        )
    }

    #[tokio::test]
    async fn message_without_history_is_relayed() {
        let mock = MockProvider::replying("Use 'since' with a point in time.");
        let relay = relay_with(&mock, RelayOptions::default());

        let reply = relay
            .handle(&json!({"message": "How do I use 'since'?"}))
            .await
            .unwrap();

        assert_eq!(reply, "Use 'since' with a point in time.");
        assert_eq!(mock.calls(), 1);
        let request = mock.last_request();
        assert_eq!(request.messages, vec![Message::user("How do I use 'since'?")]);
        assert_eq!(request.system.as_deref(), Some("You are a tutor."));
        assert_eq!(request.model, "gemini-2.5-flash");
    }

    #[tokio::test]
    async fn history_precedes_new_message() {
        let mock = MockProvider::replying("The present perfect...");
        let relay = relay_with(&mock, RelayOptions::default());

        relay
            .handle(&json!({
                "history": [
                    {"role": "user", "content": "Hi"},
                    {"role": "bot", "content": "Hello!"}
                ],
                "message": "Explain present perfect"
            }))
            .await
            .unwrap();

        assert_eq!(
            mock.last_request().messages,
            vec![
                Message::user("Hi"),
                Message::assistant("Hello!"),
                Message::user("Explain present perfect"),
            ]
        );
    }

    #[tokio::test]
    async fn invalid_message_never_reaches_provider() {
        let mock = MockProvider::replying("unused");
        let relay = relay_with(&mock, RelayOptions::default());

        for body in [json!({"message": 123}), json!({}), json!({"message": ""}), json!([])] {
            let err = relay.handle(&body).await.unwrap_err();
            assert!(matches!(err, RelayError::Validation(_)));
        }
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn provider_failure_is_reported() {
        let mock = MockProvider::failing();
        let relay = relay_with(&mock, RelayOptions::default());

        let err = relay.handle(&json!({"message": "hi"})).await.unwrap_err();
        assert!(matches!(err, RelayError::Provider(LlmError::Provider { .. })));
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn generation_options_are_forwarded() {
        let mock = MockProvider::replying("ok");
        let options = RelayOptions {
            model: "gemini-2.5-pro".to_string(),
            temperature: Some(0.2),
            max_output_tokens: Some(256),
            timeout: None,
        };
        let relay = relay_with(&mock, options);

        relay.handle(&json!({"message": "hi"})).await.unwrap();

        let request = mock.last_request();
        assert_eq!(request.model, "gemini-2.5-pro");
        assert_eq!(request.temperature, Some(0.2));
        assert_eq!(request.max_tokens, Some(256));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_provider_times_out_when_configured() {
        let mock = MockProvider::replying("late").with_delay(Duration::from_secs(120));
        let options = RelayOptions {
            timeout: Some(Duration::from_secs(5)),
            ..RelayOptions::default()
        };
        let relay = relay_with(&mock, options);

        let err = relay.handle(&json!({"message": "hi"})).await.unwrap_err();
        assert!(matches!(err, RelayError::Provider(LlmError::Timeout(5))));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_provider_completes_without_timeout() {
        let mock = MockProvider::replying("eventually").with_delay(Duration::from_secs(600));
        let relay = relay_with(&mock, RelayOptions::default());

        let reply = relay.handle(&json!({"message": "hi"})).await.unwrap();
        assert_eq!(reply, "eventually");
    }

    #[test]
    fn options_follow_config() {
        let config = RelayConfig {
            model: "gemini-2.0-flash".to_string(),
            request_timeout_secs: Some(30),
            temperature: Some(0.9),
            ..RelayConfig::default()
        };
        let options = RelayOptions::from_config(&config);
        assert_eq!(options.model, "gemini-2.0-flash");
        assert_eq!(options.timeout, Some(Duration::from_secs(30)));
        assert_eq!(options.temperature, Some(0.9));
        assert_eq!(options.max_output_tokens, None);
    }
}
