//! The transient contact draft.
//!
//! A draft wraps the raw key/value body of an incoming request together with
//! the validation errors accumulated against it and, after a successful
//! `register`/`edit`, the persisted record. Drafts live for a single
//! operation and hold no cross-operation state.

use crate::domain::EmailAddress;
use crate::models::{ContactRecord, NewContact};
use serde_json::{Map, Value};

/// The fields a draft keeps after normalization, in wire order.
const DRAFT_FIELDS: [&str; 4] = ["firstName", "lastName", "email", "phone"];

/// Maximum first-name length accepted by validation.
const MAX_NAME_LEN: usize = 50;

/// A pending contact: raw input, accumulated validation errors, and the
/// persisted record once an operation succeeds.
///
/// Validation never fails the operation by itself; messages accumulate on
/// the draft and callers inspect [`errors`](Self::errors) afterwards.
#[derive(Debug, Clone, Default)]
pub struct ContactDraft {
    body: Map<String, Value>,
    errors: Vec<String>,
    record: Option<ContactRecord>,
}

impl ContactDraft {
    /// Wrap a raw key/value body as a pending draft.
    pub fn new(body: Map<String, Value>) -> Self {
        Self {
            body,
            errors: Vec::new(),
            record: None,
        }
    }

    /// Build a draft from any JSON value. Non-object input yields an empty
    /// body, which validation will then reject.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(body) => Self::new(body),
            _ => Self::new(Map::new()),
        }
    }

    /// Normalize the body in place.
    ///
    /// Every value that is not already a string is coerced to the empty
    /// string; the body is then rebuilt keeping exactly the four contact
    /// fields, each trimmed of leading and trailing whitespace. Missing
    /// fields become empty strings. Idempotent.
    pub fn normalize(&mut self) {
        for value in self.body.values_mut() {
            if !value.is_string() {
                *value = Value::String(String::new());
            }
        }

        let mut normalized = Map::new();
        for key in DRAFT_FIELDS {
            let trimmed = self
                .body
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or("")
                .trim()
                .to_string();
            normalized.insert(key.to_string(), Value::String(trimmed));
        }
        self.body = normalized;
    }

    /// Run normalization, then append every applicable validation message.
    ///
    /// Checks do not short-circuit; each failing rule contributes its
    /// message, in order:
    ///
    /// 1. first name longer than 50 characters
    /// 2. non-empty email that is not syntactically valid
    /// 3. empty first name
    /// 4. both email and phone empty
    pub fn validate(&mut self) {
        self.normalize();

        if self.first_name().chars().count() > MAX_NAME_LEN {
            self.errors.push("name exceeds 50 characters".to_string());
        }

        if !self.email().is_empty() && !EmailAddress::is_valid(self.email()) {
            self.errors.push("invalid email".to_string());
        }

        if self.first_name().is_empty() {
            self.errors.push("name is required".to_string());
        }

        if self.email().is_empty() && self.phone().is_empty() {
            self.errors.push("email or phone required".to_string());
        }
    }

    fn field(&self, key: &str) -> &str {
        self.body.get(key).and_then(Value::as_str).unwrap_or("")
    }

    /// First name field of the current body.
    pub fn first_name(&self) -> &str {
        self.field("firstName")
    }

    /// Last name field of the current body.
    pub fn last_name(&self) -> &str {
        self.field("lastName")
    }

    /// Email field of the current body.
    pub fn email(&self) -> &str {
        self.field("email")
    }

    /// Phone field of the current body.
    pub fn phone(&self) -> &str {
        self.field("phone")
    }

    /// Validation messages accumulated so far.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// True when no validation message has been recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The persisted record, if an operation has completed on this draft.
    pub fn record(&self) -> Option<&ContactRecord> {
        self.record.as_ref()
    }

    /// Take the persisted record out of the draft.
    pub fn take_record(&mut self) -> Option<ContactRecord> {
        self.record.take()
    }

    pub(crate) fn set_record(&mut self, record: ContactRecord) {
        self.record = Some(record);
    }

    /// The normalized body as a store payload. Call after `validate`.
    pub fn to_new_contact(&self) -> NewContact {
        NewContact {
            first_name: self.first_name().to_string(),
            last_name: self.last_name().to_string(),
            email: self.email().to_string(),
            phone: self.phone().to_string(),
        }
    }
}
