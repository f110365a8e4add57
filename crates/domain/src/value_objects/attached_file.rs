//! Attached file value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for attachment paths
const MAX_PATH_LENGTH: usize = 500;

/// A validated reference to a file attached to a comment.
///
/// The path is a storage-layer reference; this type only guarantees it is
/// non-empty, within length limits, and free of null bytes and control
/// characters. Whether the file exists is the storage backend's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AttachedFile(String);

impl AttachedFile {
    /// Create a new validated attached file reference.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFilePath` if:
    /// - The path is empty after trimming
    /// - The path exceeds 500 characters
    /// - The path contains null bytes or control characters
    pub fn new(path: impl Into<String>) -> Result<Self, DomainError> {
        let path = path.into();
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_file_path("path cannot be empty"));
        }
        if trimmed.len() > MAX_PATH_LENGTH {
            return Err(DomainError::invalid_file_path(format!(
                "path cannot exceed {} characters",
                MAX_PATH_LENGTH
            )));
        }
        if trimmed.chars().any(|c| c == '\0' || c.is_control()) {
            return Err(DomainError::invalid_file_path(
                "path cannot contain null bytes or control characters",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the path as a string slice.
    pub fn path(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttachedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for AttachedFile {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<AttachedFile> for String {
    fn from(file: AttachedFile) -> String {
        file.0
    }
}

impl AsRef<str> for AttachedFile {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
