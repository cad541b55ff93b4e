//! Email Value Object
//!
//! The email address is the account's natural key, so it is normalized
//! once at construction and compared byte-for-byte afterwards.
//!
//! Normalization only case-folds the domain part. The local part is
//! left as entered: mailbox names are case-sensitive per RFC 5321 even
//! though most providers ignore case.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Normalized email address
///
/// Deserialization goes through [`Email::new`], so a decoded value is
/// always normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Email(String);

impl Email {
    /// Normalize and validate an email address
    pub fn new(email: impl AsRef<str>) -> AppResult<Self> {
        let email = email.as_ref().trim();

        if email.is_empty() {
            return Err(AppError::bad_request("Email cannot be empty"));
        }

        let Some((local, domain)) = email.rsplit_once('@') else {
            return Err(AppError::bad_request("Email must contain '@'"));
        };

        if local.is_empty() || domain.is_empty() {
            return Err(AppError::bad_request("Invalid email format"));
        }

        let normalized = format!("{}@{}", local, domain.to_lowercase());

        if normalized.chars().count() > EMAIL_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Email must be at most {} characters",
                EMAIL_MAX_LENGTH
            )));
        }

        Ok(Self(normalized))
    }

    /// Create from database value (assumed already normalized)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Domain part (after the last `@`)
    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map_or("", |(_, domain)| domain)
    }

    /// Local part (before the last `@`)
    pub fn local_part(&self) -> &str {
        self.0.rsplit_once('@').map_or("", |(local, _)| local)
    }
}

impl FromStr for Email {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Email::new(s)
    }
}

impl TryFrom<String> for Email {
    type Error = AppError;

    fn try_from(value: String) -> AppResult<Self> {
        Email::new(value)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_is_lowercased() {
        let email = Email::new("a@B.COM").unwrap();
        assert_eq!(email.as_str(), "a@b.com");
    }

    #[test]
    fn test_local_part_case_is_preserved() {
        let email = Email::new("John.Doe@Example.ORG").unwrap();
        assert_eq!(email.as_str(), "John.Doe@example.org");
        assert_eq!(email.local_part(), "John.Doe");
        assert_eq!(email.domain(), "example.org");
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let email = Email::new("  user@Example.com \n").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[test]
    fn test_splits_on_last_at_sign() {
        let email = Email::new("\"odd@local\"@Example.COM").unwrap();
        assert_eq!(email.local_part(), "\"odd@local\"");
        assert_eq!(email.domain(), "example.com");
    }

    #[test]
    fn test_email_invalid() {
        assert!(Email::new("").is_err());
        assert!(Email::new("   ").is_err());
        assert!(Email::new("userexample.com").is_err());
        assert!(Email::new("user@").is_err());
        assert!(Email::new("@example.com").is_err());
    }

    #[test]
    fn test_email_too_long() {
        let local = "a".repeat(250);
        let err = Email::new(format!("{}@x.io", local)).unwrap_err();
        assert!(err.message().contains("at most"));
    }

    #[test]
    fn test_deserialize_normalizes() {
        let email: Email = serde_json::from_str("\"  a@B.COM \"").unwrap();
        assert_eq!(email.as_str(), "a@b.com");
        assert_eq!(serde_json::to_string(&email).unwrap(), "\"a@b.com\"");
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        assert!(serde_json::from_str::<Email>("\"\"").is_err());
        assert!(serde_json::from_str::<Email>("\"no-at-sign\"").is_err());
    }

    #[test]
    fn test_from_str_and_display() {
        let email: Email = "admin@X.com".parse().unwrap();
        assert_eq!(email.to_string(), "admin@x.com");
    }
}
