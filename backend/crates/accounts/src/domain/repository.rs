//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infrastructure layer.

use crate::domain::entity::account::Account;
use crate::domain::value_object::email::Email;
use crate::error::AccountResult;

/// Account repository trait
///
/// `create` must enforce uniqueness of the normalized email atomically and
/// report a duplicate as [`AccountError::EmailTaken`](crate::error::AccountError::EmailTaken).
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Persist a new account
    async fn create(&self, account: &Account) -> AccountResult<()>;

    /// Find account by normalized email
    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<Account>>;

    /// Check if an account with this email exists
    async fn exists_by_email(&self, email: &Email) -> AccountResult<bool>;
}
