//! Account Error Types
//!
//! Account-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Account-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// Account-specific error variants
#[derive(Debug, Error)]
pub enum AccountError {
    /// Normalized email already belongs to an account
    #[error("Email address already registered")]
    EmailTaken,

    /// Privileged account requested with a flag explicitly set to false
    #[error("Privileged account must have {0}=true")]
    InvalidPrivilegedAccount(&'static str),

    /// Email rejected by normalization
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// Account not found
    #[error("Account not found")]
    AccountNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::EmailTaken => ErrorKind::Conflict,
            AccountError::InvalidPrivilegedAccount(_) => ErrorKind::UnprocessableEntity,
            AccountError::InvalidEmail(_) => ErrorKind::BadRequest,
            AccountError::AccountNotFound => ErrorKind::NotFound,
            AccountError::Database(sqlx::Error::PoolTimedOut | sqlx::Error::Io(_)) => {
                ErrorKind::ServiceUnavailable
            }
            AccountError::Database(_) | AccountError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError, logging it at a level matching its kind
    pub fn to_app_error(&self) -> AppError {
        self.log();
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            AccountError::EmailTaken => err.with_action("Use a different email address"),
            AccountError::InvalidPrivilegedAccount(flag) => {
                err.with_action(format!("Leave {} unset or set it to true", flag))
            }
            _ => err,
        }
    }

    fn log(&self) {
        match self {
            AccountError::Database(e) => {
                tracing::error!(error = %e, "Account database error");
            }
            AccountError::Internal(msg) => {
                tracing::error!(message = %msg, "Account internal error");
            }
            AccountError::InvalidPrivilegedAccount(flag) => {
                tracing::warn!(flag, "Rejected privileged account with flag disabled");
            }
            _ => {
                tracing::debug!(error = %self, "Account error");
            }
        }
    }
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        err.to_app_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(AccountError::EmailTaken.kind(), ErrorKind::Conflict);
        assert_eq!(
            AccountError::InvalidPrivilegedAccount("is_staff").kind(),
            ErrorKind::UnprocessableEntity
        );
        assert_eq!(
            AccountError::InvalidEmail("x".into()).kind(),
            ErrorKind::BadRequest
        );
        assert_eq!(AccountError::AccountNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(
            AccountError::Database(sqlx::Error::PoolTimedOut).kind(),
            ErrorKind::ServiceUnavailable
        );
        assert_eq!(
            AccountError::Internal("boom".into()).kind(),
            ErrorKind::InternalServerError
        );
    }

    #[test]
    fn test_privileged_message_names_flag() {
        let err = AccountError::InvalidPrivilegedAccount("is_superuser");
        assert_eq!(err.to_string(), "Privileged account must have is_superuser=true");
    }

    #[test]
    fn test_to_app_error() {
        let app_err: AppError = AccountError::EmailTaken.into();
        assert_eq!(app_err.status_code(), 409);
        assert_eq!(app_err.message(), "Email address already registered");
        assert_eq!(app_err.action(), Some("Use a different email address"));
    }
}
