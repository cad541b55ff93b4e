//! Accounts Backend Module
//!
//! Email-keyed account model and account creation.
//!
//! Clean Architecture structure:
//! - `domain/` - Account entity, email value object, repository trait
//! - `application/` - Account creation use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//!
//! ## Identity Model
//! - The normalized email address is the only natural key
//! - Accounts never hold a usable password; authentication is delegated
//!   to the host application or an external identity provider
//! - `is_staff` / `is_superuser` flags are set at creation time

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;


// Re-exports for convenience
pub use application::{ExtraFields, create_account, create_privileged_account};
pub use domain::{Account, AccountId, AccountRepository, Email};
pub use error::{AccountError, AccountResult};
pub use infra::{InMemoryAccountRepository, PgAccountRepository};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
