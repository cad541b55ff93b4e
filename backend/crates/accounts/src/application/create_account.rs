//! Create Account Use Cases
//!
//! Builds and persists new accounts. Both entry points take the
//! repository explicitly; nothing here holds state between calls.

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AccountError, AccountResult};

/// Optional attributes for a new account
///
/// `None` means "not supplied": the use case fills in its own default.
/// A `Some` value is always honored as given.
#[derive(Debug, Clone, Default)]
pub struct ExtraFields {
    pub is_staff: Option<bool>,
    pub is_superuser: Option<bool>,
    pub is_active: Option<bool>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl ExtraFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn staff(mut self, is_staff: bool) -> Self {
        self.is_staff = Some(is_staff);
        self
    }

    pub fn superuser(mut self, is_superuser: bool) -> Self {
        self.is_superuser = Some(is_superuser);
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = Some(first.into());
        self.last_name = Some(last.into());
        self
    }
}

/// Create a regular account.
///
/// `is_staff` and `is_superuser` default to false. Caller-supplied flags
/// are accepted without validation, so callers exposed to untrusted input
/// must not pass them through.
pub async fn create_account<R>(
    repo: &R,
    email: &str,
    mut extra: ExtraFields,
) -> AccountResult<Account>
where
    R: AccountRepository,
{
    extra.is_staff.get_or_insert(false);
    extra.is_superuser.get_or_insert(false);

    save_account(repo, email, extra).await
}

/// Create a privileged (staff + superuser) account.
///
/// Flags default to true. Passing `false` for either one fails with
/// [`AccountError::InvalidPrivilegedAccount`] before anything is persisted.
pub async fn create_privileged_account<R>(
    repo: &R,
    email: &str,
    mut extra: ExtraFields,
) -> AccountResult<Account>
where
    R: AccountRepository,
{
    let is_staff = *extra.is_staff.get_or_insert(true);
    let is_superuser = *extra.is_superuser.get_or_insert(true);

    if !is_staff {
        return Err(AccountError::InvalidPrivilegedAccount("is_staff"));
    }
    if !is_superuser {
        return Err(AccountError::InvalidPrivilegedAccount("is_superuser"));
    }

    save_account(repo, email, extra).await
}

async fn save_account<R>(repo: &R, email: &str, extra: ExtraFields) -> AccountResult<Account>
where
    R: AccountRepository,
{
    let email =
        Email::new(email).map_err(|e| AccountError::InvalidEmail(e.message().to_string()))?;

    let mut account = Account::new(email);
    if let Some(is_staff) = extra.is_staff {
        account.is_staff = is_staff;
    }
    if let Some(is_superuser) = extra.is_superuser {
        account.is_superuser = is_superuser;
    }
    if let Some(is_active) = extra.is_active {
        account.is_active = is_active;
    }
    if let Some(first_name) = extra.first_name {
        account.first_name = first_name;
    }
    if let Some(last_name) = extra.last_name {
        account.last_name = last_name;
    }

    repo.create(&account).await?;

    tracing::info!(
        account_id = %account.account_id,
        email = %account.email,
        is_staff = account.is_staff,
        is_superuser = account.is_superuser,
        "Account created"
    );

    Ok(account)
}
