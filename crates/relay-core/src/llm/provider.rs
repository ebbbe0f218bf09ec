//! LlmProvider trait definition.
//!
//! This is the core abstraction every remote model backend implements.
//! Uses RPITIT for `complete`; see `BoxLlmProvider` for dynamic dispatch.

use relay_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for LLM provider backends.
///
/// Implementations live in relay-infra (e.g., `GeminiProvider`). A provider
/// must be safe to share across concurrent requests: `complete` takes
/// `&self` and must not keep per-conversation state between calls.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
