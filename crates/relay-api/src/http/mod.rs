//! HTTP layer: a single `POST /api/chat` route with CORS and request tracing.

pub mod error;
pub mod handlers;
pub mod router;
