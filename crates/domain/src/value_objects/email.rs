//! Validated email address value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for an email address (RFC 5321 path limit)
const MAX_EMAIL_LENGTH: usize = 254;

/// A validated, normalized email address.
///
/// Valid by construction:
/// - Trimmed of leading/trailing whitespace
/// - Exactly one `@` separating a non-empty local part from a dotted domain
/// - No whitespace or control characters
/// - Domain part lowercased (local part preserved as written)
///
/// # Example
///
/// ```
/// use order_comments_domain::Email;
///
/// let email = Email::new("customer@Example.COM").unwrap();
/// assert_eq!(email.as_str(), "customer@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Create a new validated email address.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEmail` if the address is empty, contains
    /// whitespace or control characters, lacks exactly one `@`, or has a
    /// malformed local or domain part. Returns `DomainError::Validation` if
    /// the address exceeds 254 characters.
    pub fn new(address: impl Into<String>) -> Result<Self, DomainError> {
        let address = address.into();
        let trimmed = address.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_email("address cannot be empty"));
        }
        if trimmed.len() > MAX_EMAIL_LENGTH {
            return Err(DomainError::validation(format!(
                "Email address cannot exceed {} characters",
                MAX_EMAIL_LENGTH
            )));
        }
        if trimmed.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(DomainError::invalid_email(
                "address cannot contain whitespace or control characters",
            ));
        }

        let mut parts = trimmed.splitn(3, '@');
        let local = parts.next().unwrap_or_default();
        let domain = match (parts.next(), parts.next()) {
            (Some(domain), None) => domain,
            (_, Some(_)) => {
                return Err(DomainError::invalid_email(
                    "address must contain exactly one '@'",
                ))
            }
            (None, _) => return Err(DomainError::invalid_email("address must contain '@'")),
        };

        if local.is_empty() {
            return Err(DomainError::invalid_email("local part cannot be empty"));
        }
        if domain.is_empty() {
            return Err(DomainError::invalid_email("domain part cannot be empty"));
        }
        if !domain.contains('.') {
            return Err(DomainError::invalid_email(
                "domain part must contain a '.'",
            ));
        }
        if domain.starts_with('.')
            || domain.ends_with('.')
            || domain.starts_with('-')
            || domain.ends_with('-')
            || domain.contains("..")
        {
            return Err(DomainError::invalid_email("domain part is malformed"));
        }

        Ok(Self(format!("{}@{}", local, domain.to_lowercase())))
    }

    /// Returns the normalized address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> String {
        email.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
