//! Persona text steering the model's identity, tone and topic boundary.
//!
//! A [`PersonaConfig`] is built once at startup and shared read-only by
//! every request. The built-in persona is embedded at compile time; a
//! deployment may replace it with the contents of a file.

use std::fmt;

use crate::error::ConfigError;

const BUILTIN_PERSONA: &str = include_str!("default_persona.md");

/// Immutable system-level instruction text sent with every model call.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonaConfig {
    text: String,
}

impl PersonaConfig {
    /// The English tutor persona shipped with the relay.
    pub fn builtin() -> Self {
        Self {
            text: BUILTIN_PERSONA.trim().to_string(),
        }
    }

    /// Build a persona from arbitrary instruction text.
    ///
    /// Surrounding whitespace is trimmed. Whitespace-only text is rejected
    /// because a blank system instruction would silently drop the topic
    /// boundary.
    pub fn from_text(text: impl AsRef<str>) -> Result<Self, ConfigError> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyPersona);
        }
        Ok(Self {
            text: trimmed.to_string(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

// Persona text is long; keep Debug output to a summary.
impl fmt::Debug for PersonaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersonaConfig")
            .field("chars", &self.text.chars().count())
            .finish()
    }
}
