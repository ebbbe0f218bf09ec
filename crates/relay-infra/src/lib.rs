//! Infrastructure implementations for the relay.
//!
//! - `llm`: concrete `LlmProvider` backends (Gemini)
//! - `secret`: secret providers and the startup credential check
//! - `config`: `relay.toml` and persona file loading

pub mod config;
pub mod llm;
pub mod secret;
