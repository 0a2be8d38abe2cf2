//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating or querying a contact record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A name or phone number failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number being edited is not on the record
    #[error("Phone number {0} not found")]
    PhoneNotFound(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
