//! ContactId value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Longest identifier the store is expected to hand out.
const MAX_ID_LEN: usize = 100;

/// A type-safe wrapper for contact ids.
///
/// Malformed identifiers are rejected at construction time, so every
/// `ContactId` reaching the repository layer is well-formed. This replaces
/// the weaker convention of silently ignoring operations on bad ids:
/// callers get an explicit error instead of an ambiguous no-op.
///
/// # Example
///
/// ```
/// use contact_keeper::domain::ContactId;
///
/// let id = ContactId::new("contact_123").unwrap();
/// assert_eq!(id.as_str(), "contact_123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactId(String);

impl ContactId {
    /// Create a new ContactId, validating that it is well-formed.
    ///
    /// # Validation Rules
    ///
    /// - Must not be empty
    /// - Must be at most 100 characters
    /// - Must not contain whitespace or control characters
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyId` for an empty id and
    /// `ValidationError::InvalidId` for any other malformed input.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();

        if id.is_empty() {
            return Err(ValidationError::EmptyId);
        }

        if id.chars().count() > MAX_ID_LEN
            || id.chars().any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(ValidationError::InvalidId(id));
        }

        Ok(Self(id))
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for ContactId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for ContactId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactId::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
