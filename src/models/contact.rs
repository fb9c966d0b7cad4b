//! Contact record and payload types.

use crate::domain::ContactId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contact as persisted by the document store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    /// Store-assigned unique identifier, immutable after creation
    pub id: ContactId,

    /// First name (required, non-empty, at most 50 characters)
    pub first_name: String,

    /// Last name
    #[serde(default)]
    pub last_name: String,

    /// Email address; validated when non-empty
    #[serde(default)]
    pub email: String,

    /// Phone number
    #[serde(default)]
    pub phone: String,

    /// Creation timestamp, set once by the store
    pub created_at: DateTime<Utc>,
}

impl ContactRecord {
    /// Full display name, first and last joined with a space.
    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }

    /// The mutable fields of this record, as sent on a full-document update.
    pub fn to_new_contact(&self) -> NewContact {
        NewContact {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// The mutable fields of a contact.
///
/// This is the payload sent to the store on create and on full-document
/// update; the store owns `id` and `createdAt`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    /// First name
    pub first_name: String,

    /// Last name
    #[serde(default)]
    pub last_name: String,

    /// Email address
    #[serde(default)]
    pub email: String,

    /// Phone number
    #[serde(default)]
    pub phone: String,
}

impl NewContact {
    /// Create a payload from the four mutable fields.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}
