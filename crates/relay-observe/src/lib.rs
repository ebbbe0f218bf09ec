//! Observability for the relay: tracing subscriber setup.

pub mod tracing_setup;
