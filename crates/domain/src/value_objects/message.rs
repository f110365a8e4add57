//! Comment message value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for comment messages
const MAX_MESSAGE_LENGTH: usize = 5000;

/// A non-empty comment message.
///
/// The input is stored verbatim (no trimming) so callers read back exactly
/// what they wrote; emptiness is judged on the trimmed text, so
/// whitespace-only input is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommentMessage(String);

impl CommentMessage {
    /// Create a new validated comment message.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyMessage` if the message is empty or
    /// whitespace-only, and `DomainError::Validation` if it exceeds
    /// 5000 characters.
    pub fn new(message: impl Into<String>) -> Result<Self, DomainError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(DomainError::EmptyMessage);
        }
        if message.len() > MAX_MESSAGE_LENGTH {
            return Err(DomainError::validation(format!(
                "Comment message cannot exceed {} characters",
                MAX_MESSAGE_LENGTH
            )));
        }
        Ok(Self(message))
    }

    /// Returns the message as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommentMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CommentMessage {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CommentMessage> for String {
    fn from(message: CommentMessage) -> String {
        message.0
    }
}

impl AsRef<str> for CommentMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_message() {
        let message = CommentMessage::new("Where is my package?").unwrap();
        assert_eq!(message.as_str(), "Where is my package?");
    }

    #[test]
    fn message_is_stored_verbatim() {
        let message = CommentMessage::new("  spaced out  ").unwrap();
        assert_eq!(message.as_str(), "  spaced out  ");
    }

    #[test]
    fn empty_rejected() {
        let err = CommentMessage::new("").unwrap_err();
        assert_eq!(err, DomainError::EmptyMessage);
    }

    #[test]
    fn whitespace_only_rejected() {
        let err = CommentMessage::new("   \n\t ").unwrap_err();
        assert_eq!(err, DomainError::EmptyMessage);
    }

    #[test]
    fn too_long_rejected() {
        let long_message = "a".repeat(5001);
        let err = CommentMessage::new(long_message).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(err.to_string().contains("5000"));
    }

    #[test]
    fn max_length_accepted() {
        let max_message = "a".repeat(5000);
        let message = CommentMessage::new(max_message).unwrap();
        assert_eq!(message.as_str().len(), 5000);
    }

    #[test]
    fn try_from_string() {
        let message: CommentMessage = "Thanks!".to_string().try_into().unwrap();
        assert_eq!(message.as_str(), "Thanks!");
    }

    #[test]
    fn into_string() {
        let message = CommentMessage::new("Resolved.").unwrap();
        let s: String = message.into();
        assert_eq!(s, "Resolved.");
    }

    #[test]
    fn serde_rejects_empty() {
        let result: Result<CommentMessage, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
