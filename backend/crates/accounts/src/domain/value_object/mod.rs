//! Value Object Module

pub mod account_id;
pub mod email;
