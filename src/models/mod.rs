//! Data models for contact records.
//!
//! This module contains the persisted record, the mutable-field payload sent
//! to the store, and the transient draft that carries validation state.

pub mod contact;
pub mod draft;

pub use contact::{ContactRecord, NewContact};
pub use draft::ContactDraft;
