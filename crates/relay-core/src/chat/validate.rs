//! Input validation for `POST /api/chat` bodies.
//!
//! Turns an untyped JSON body into a [`ChatTurn`] or a [`ValidationError`].
//! This runs before any provider call; a rejected body never reaches the
//! model.

use serde_json::Value;

use relay_types::chat::ChatTurn;
use relay_types::error::ValidationError;

use super::normalize::normalize_history;

/// Validate a raw chat turn body and normalize its history.
///
/// `message` must be a non-empty string. `history` is optional and handled
/// leniently by [`normalize_history`]. Unknown fields are ignored.
pub fn validate_turn(body: &Value) -> Result<ChatTurn, ValidationError> {
    let fields = body.as_object().ok_or(ValidationError::MalformedBody)?;

    let message = match fields.get("message") {
        None | Some(Value::Null) => return Err(ValidationError::MissingMessage),
        Some(Value::String(s)) if s.is_empty() => return Err(ValidationError::EmptyMessage),
        Some(Value::String(s)) => s.clone(),
        Some(other) => return Err(ValidationError::MessageNotString(json_kind(other))),
    };

    Ok(ChatTurn {
        history: normalize_history(fields.get("history")),
        message,
    })
}

/// Short name of a JSON value's type, for logs and error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
