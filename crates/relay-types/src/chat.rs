//! Chat turn types exchanged with the front-end.
//!
//! A [`ChatTurn`] is the validated form of one `POST /api/chat` body; a
//! [`ChatTurnResponse`] is what goes back over the wire.

use serde::{Deserialize, Serialize};

use crate::llm::Message;

/// Fixed body text for a request whose `message` is missing or invalid.
pub const INVALID_MESSAGE_TEXT: &str = "Mensagem inválida.";

/// Fixed body text for any failure while invoking the model.
pub const PROVIDER_FAILURE_TEXT: &str = "Erro na IA. Tente novamente.";

/// A validated chat turn: normalized history plus the new user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    /// Prior turns, oldest first, already normalized to the two canonical roles.
    pub history: Vec<Message>,
    /// The new user utterance.
    pub message: String,
}

/// Response body for `POST /api/chat`.
///
/// Serialized untagged so exactly one of `response` or `error` appears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatTurnResponse {
    Reply { response: String },
    Failure { error: String },
}

impl ChatTurnResponse {
    pub fn reply(text: impl Into<String>) -> Self {
        ChatTurnResponse::Reply {
            response: text.into(),
        }
    }

    pub fn invalid_message() -> Self {
        ChatTurnResponse::Failure {
            error: INVALID_MESSAGE_TEXT.to_string(),
        }
    }

    pub fn provider_failure() -> Self {
        ChatTurnResponse::Failure {
            error: PROVIDER_FAILURE_TEXT.to_string(),
        }
    }
}
