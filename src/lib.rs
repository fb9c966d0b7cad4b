//! Contact Keeper - validation and persistence for contact records.
//!
//! This library implements the data-access layer for a "contact" entity:
//! field normalization, accumulated validation, and CRUD persistence against
//! an external document store reached over HTTP.
//!
//! # Architecture
//!
//! - **models**: contact records, payloads, and the transient draft
//! - **domain**: validated value objects (contact ids, email addresses)
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables
//! - **client**: HTTP client for the document-store collection API
//! - **repositories**: storage abstraction over the store client
//! - **services**: the contact manager binding validation to persistence
//! - **metrics**: request counters for the HTTP client

// Re-export commonly used types
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod services;

pub use client::{AsyncStoreClient, AsyncStoreClientImpl, StoreClient};
pub use config::Config;
pub use domain::{ContactId, EmailAddress, ValidationError};
pub use error::{ConfigError, StoreError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{ContactDraft, ContactRecord, NewContact};
pub use repositories::{ContactRepository, HttpContactRepository};
pub use services::{ContactManager, ContactService};
