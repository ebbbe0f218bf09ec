//! Shared domain types for the chat-turn relay.
//!
//! This crate contains the data shapes used across the relay: chat turns,
//! provider-agnostic LLM requests/responses, persona text, configuration,
//! and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod persona;
