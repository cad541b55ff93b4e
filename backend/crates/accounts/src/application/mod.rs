//! Application Layer
//!
//! Account creation use cases.

pub mod create_account;

// Re-exports
pub use create_account::{ExtraFields, create_account, create_privileged_account};
