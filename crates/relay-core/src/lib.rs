//! Business logic for the chat-turn relay.
//!
//! This crate defines the `LlmProvider` port that the infrastructure layer
//! implements, plus the relay pipeline itself: validate -> normalize history
//! -> invoke model -> extract text. It depends only on `relay-types` --
//! never on `relay-infra` or any HTTP crate.

pub mod chat;
pub mod llm;
pub mod secret;
