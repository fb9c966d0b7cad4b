//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided id is empty.
    EmptyId,

    /// The provided id is not a well-formed identifier.
    InvalidId(String),

    /// The provided email address is invalid.
    InvalidEmail(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "id cannot be empty"),
            Self::InvalidId(id) => write!(f, "malformed contact id: {}", id),
            Self::InvalidEmail(email) => write!(f, "invalid email address: {}", email),
        }
    }
}

impl std::error::Error for ValidationError {}
