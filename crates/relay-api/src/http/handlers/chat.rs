//! Chat relay endpoint.
//!
//! POST /api/chat
//!
//! Body: `{ "history": [{ "role", "content" }, ...]?, "message": string }`.
//! Replies `{ "response": text }` (200), or `{ "error": fixed text }` with
//! 400 for an invalid message and 500 for any model failure.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde_json::Value;

use relay_types::chat::ChatTurnResponse;
use relay_types::error::ValidationError;

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /api/chat -- relay one chat turn to the model.
///
/// The body is taken as untyped JSON so wrong field types surface as the
/// relay's own validation error instead of an extractor rejection.
pub async fn chat(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatTurnResponse>, AppError> {
    let Json(body) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "unreadable chat body");
        ValidationError::MalformedBody
    })?;

    let text = state.relay.handle(&body).await?;

    Ok(Json(ChatTurnResponse::reply(text)))
}
