//! Concrete LLM provider implementations.

pub mod gemini;
