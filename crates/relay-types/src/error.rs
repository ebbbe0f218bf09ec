use thiserror::Error;

/// Reasons a chat turn payload is rejected before any model call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("request body is not a JSON object")]
    MalformedBody,

    #[error("message is missing")]
    MissingMessage,

    #[error("message must be a string, got {0}")]
    MessageNotString(&'static str),

    #[error("message is empty")]
    EmptyMessage,
}

/// Errors raised while assembling configuration at startup.
///
/// All of these are fatal: the process must not begin serving.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required secret '{0}' is not set")]
    MissingSecret(String),

    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("persona text is empty")]
    EmptyPersona,
}
