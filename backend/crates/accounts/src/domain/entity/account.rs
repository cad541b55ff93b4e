//! Account Entity
//!
//! A user identity keyed by email address. There is no separate login
//! name and no locally stored secret: authentication is delegated to the
//! host application or an external identity provider.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::value_object::{account_id::AccountId, email::Email};

/// Account entity
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    /// Internal UUID identifier
    pub account_id: AccountId,
    /// Normalized email address (unique, the natural key)
    pub email: Email,
    pub first_name: String,
    pub last_name: String,
    /// Grants access to the administrative panel
    pub is_staff: bool,
    /// Bypasses every permission check
    pub is_superuser: bool,
    /// Inactive accounts are kept but treated as disabled by the host
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub date_joined: DateTime<Utc>,
}

impl Account {
    /// Field that identifies the account
    pub const USERNAME_FIELD: &'static str = "email";
    /// Field holding the contact address
    pub const EMAIL_FIELD: &'static str = "email";
    /// Fields prompted for on top of `USERNAME_FIELD` when creating a superuser
    pub const REQUIRED_FIELDS: &'static [&'static str] = &[];

    /// Create a new, active, unprivileged account
    pub fn new(email: Email) -> Self {
        Self {
            account_id: AccountId::new(),
            email,
            first_name: String::new(),
            last_name: String::new(),
            is_staff: false,
            is_superuser: false,
            is_active: true,
            last_login: None,
            date_joined: Utc::now(),
        }
    }

    /// Accounts never carry a usable password.
    pub fn has_usable_password(&self) -> bool {
        false
    }

    pub fn natural_key(&self) -> &Email {
        &self.email
    }

    /// First and last name separated by a space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn short_name(&self) -> &str {
        &self.first_name
    }

    /// Record successful login
    pub fn record_login(&mut self) {
        self.last_login = Some(Utc::now());
    }

    pub fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(email: &str) -> Account {
        Account::new(Email::new(email).unwrap())
    }

    #[test]
    fn test_new_account_defaults() {
        let account = account("user@example.com");
        assert!(!account.is_staff);
        assert!(!account.is_superuser);
        assert!(account.is_active);
        assert!(account.last_login.is_none());
        assert_eq!(account.natural_key().as_str(), "user@example.com");
    }

    #[test]
    fn test_never_has_usable_password() {
        let mut account = account("root@example.com");
        assert!(!account.has_usable_password());

        account.is_staff = true;
        account.is_superuser = true;
        assert!(!account.has_usable_password());
    }

    #[test]
    fn test_identity_fields() {
        assert_eq!(Account::USERNAME_FIELD, "email");
        assert_eq!(Account::EMAIL_FIELD, "email");
        assert!(Account::REQUIRED_FIELDS.is_empty());
    }

    #[test]
    fn test_names() {
        let mut account = account("ada@example.com");
        assert_eq!(account.full_name(), "");

        account.first_name = "Ada".to_string();
        assert_eq!(account.full_name(), "Ada");

        account.last_name = "Lovelace".to_string();
        assert_eq!(account.full_name(), "Ada Lovelace");
        assert_eq!(account.short_name(), "Ada");
    }

    #[test]
    fn test_record_login_and_deactivate() {
        let mut account = account("user@example.com");
        account.record_login();
        assert!(account.last_login.is_some());

        account.set_active(false);
        assert!(!account.is_active);
    }

    #[test]
    fn test_serializes_without_password() {
        let json = serde_json::to_value(account("user@Example.com")).unwrap();
        assert_eq!(json["email"], "user@example.com");
        assert!(json.get("password").is_none());
    }
}
