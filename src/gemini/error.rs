/// Errors produced by the generation client
///
/// Every failure of a generation attempt ends up as one of these variants.
/// The session stores the `Display` text, so the messages are written for
/// the user.

use thiserror::Error;

/// Shown when a transport failure carries no message of its own
pub const FALLBACK_MESSAGE: &str = "Failed to generate image.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    // ========== Configuration ==========
    /// No API credential was configured
    #[error("API Key is missing. Please check your environment variables.")]
    MissingCredential,

    // ========== Transport ==========
    /// Network failure, non-success status or an unreadable body
    #[error("{0}")]
    Transport(String),

    // ========== Protocol shape ==========
    #[error("No candidates returned from Gemini.")]
    NoCandidates,

    #[error("Gemini returned a candidate but no content.")]
    NoContent,

    #[error("Gemini returned content but no parts.")]
    NoParts,

    #[error("No image data found in response.")]
    NoImageData,

    // ========== Model refusal ==========
    /// The candidate stopped without content, usually a safety block
    #[error("Generation failed. Finish reason: {0} (Likely safety filter blocked the request)")]
    Blocked(String),

    /// The model answered with text, typically explaining a refusal
    #[error("Model returned text instead of image: {0}")]
    TextInsteadOfImage(String),
}

impl GenerationError {
    /// Build a transport error, substituting the fallback for empty messages
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            GenerationError::Transport(FALLBACK_MESSAGE.to_string())
        } else {
            GenerationError::Transport(message)
        }
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        GenerationError::transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocked_message_names_reason() {
        let message = GenerationError::Blocked("SAFETY".into()).to_string();
        assert!(message.contains("SAFETY"));
    }

    #[test]
    fn test_empty_transport_message_falls_back() {
        assert_eq!(
            GenerationError::transport("  ").to_string(),
            FALLBACK_MESSAGE
        );
        assert_eq!(
            GenerationError::transport("connection refused").to_string(),
            "connection refused"
        );
    }
}
