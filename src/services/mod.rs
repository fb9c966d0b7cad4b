//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between
//! drafts and the repository. They provide a clean boundary between the
//! embedding application and the data access layer.

mod contact_service;

pub use contact_service::{ContactManager, ContactService};

// Re-export common types used by services
pub use crate::models::{ContactDraft, ContactRecord};
