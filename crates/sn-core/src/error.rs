//! # AppError
//!
//! Centralized error handling for the Share Nest crates.
//! Store mutations themselves never fail; these errors come from parsing,
//! sign-in and the owner-filling conveniences.

use thiserror::Error;

/// The primary error type for all sn-core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Validation failure (e.g., unknown category, blank email)
    #[error("validation error: {0}")]
    ValidationError(String),

    /// No signed-in user, or the user does not own the record
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Infrastructure failure surfaced by a plugin
    #[error("internal service error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }
}

/// A specialized Result type for Share Nest logic.
pub type Result<T> = std::result::Result<T, AppError>;
