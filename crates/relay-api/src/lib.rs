//! HTTP relay application layer.
//!
//! Wires configuration, the Gemini provider and the chat relay into an axum
//! router. The `tutor-relay` binary in `main.rs` is a thin bootstrap around
//! this library so the router can be exercised in tests.

pub mod cli;
pub mod http;
pub mod state;
