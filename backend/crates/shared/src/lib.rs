//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the smallest core of vocabulary shared by the
//! account crate and the management CLI:
//! - Common error kind, error type and result alias
//! - Typed ID wrappers

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
