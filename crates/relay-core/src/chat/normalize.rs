//! History normalization.
//!
//! Caller-supplied history arrives as loosely typed JSON. It is reduced to
//! the two canonical roles under two named policies:
//!
//! - **Lenient filtering** ([`normalize_entry`]): an entry whose `role` or
//!   `content` is absent, `null`, not a string, or empty is dropped. The
//!   request still proceeds.
//! - **Default-to-assistant** ([`map_role`]): only the literal `"user"` is
//!   the user; every other role string is treated as prior model output.
//!
//! Order is preserved exactly. No deduplication, truncation or length cap.

use serde_json::Value;

use relay_types::llm::{Message, MessageRole};

use super::validate::json_kind;

/// Normalize the raw `history` field of a chat turn.
///
/// `None` and `null` yield an empty history. A value that is not an array
/// is also treated as empty rather than failing the request.
pub fn normalize_history(history: Option<&Value>) -> Vec<Message> {
    let entries = match history {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            tracing::debug!(kind = json_kind(other), "history is not an array, ignoring it");
            return Vec::new();
        }
    };

    let normalized: Vec<Message> = entries.iter().filter_map(normalize_entry).collect();

    let dropped = entries.len() - normalized.len();
    if dropped > 0 {
        tracing::debug!(dropped, kept = normalized.len(), "dropped malformed history entries");
    }

    normalized
}

/// Normalize a single history entry, or `None` if it must be dropped.
pub fn normalize_entry(entry: &Value) -> Option<Message> {
    let role = non_empty_str(entry.get("role"))?;
    let content = non_empty_str(entry.get("content"))?;

    Some(Message {
        role: map_role(role),
        content: content.to_string(),
    })
}

/// Map a caller-supplied role string to a canonical role.
///
/// Exactly `"user"` maps to [`MessageRole::User`]. Anything else, including
/// `"User"`, `"bot"` and `"system"`, maps to [`MessageRole::Assistant`].
pub fn map_role(role: &str) -> MessageRole {
    if role == "user" {
        MessageRole::User
    } else {
        MessageRole::Assistant
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
        _ => None,
    }
}
