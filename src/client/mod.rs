//! HTTP client for the document-store collection holding contact records.
//!
//! This module provides a synchronous HTTP client that can be used from async
//! contexts via `tokio::task::spawn_blocking`. The client handles
//! authentication, error mapping, and the not-found semantics of the
//! collection API.

mod async_wrapper;
pub use async_wrapper::{AsyncStoreClient, AsyncStoreClientImpl};

use crate::config::Config;
use crate::error::{StoreError, StoreResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::{ContactRecord, NewContact};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// Sort expression requesting newest-first ordering from the store.
const SORT_NEWEST_FIRST: &str = "-createdAt";

/// Response wrapper for the contacts collection listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ContactsResponse {
    /// The list of contact records
    pub contacts: Vec<ContactRecord>,
}

/// HTTP client for the document-store collection API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct StoreClient {
    /// Base URL for the document store
    base_url: String,

    /// API key for authentication
    api_key: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl StoreClient {
    /// Create a new StoreClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.store_url.clone(),
            api_key: config.store_api_key.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a StoreClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_key,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Path to a single document, with the caller-supplied id encoded.
    fn contact_path(id: &str) -> String {
        format!("/contacts/{}", urlencoding::encode(id))
    }

    /// Execute a GET request with authentication.
    fn get(&self, path: &str) -> Result<ureq::Response, StoreError> {
        let timer = HttpTimer::new(self.metrics.clone());
        let url = self.build_url(path);

        let result = self
            .agent
            .get(&url)
            .set("x-api-key", &self.api_key)
            .set("Content-Type", "application/json")
            .call()
            .map_err(|e| self.map_error(e));

        match &result {
            Ok(_) => timer.complete(),
            Err(_) => timer.complete_with_error(),
        }
        result
    }

    /// Execute a POST request with authentication and JSON body.
    fn post(&self, path: &str, body: &serde_json::Value) -> Result<ureq::Response, StoreError> {
        let timer = HttpTimer::new(self.metrics.clone());
        let url = self.build_url(path);

        tracing::debug!("POST {}", url);

        let result = self
            .agent
            .post(&url)
            .set("x-api-key", &self.api_key)
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        match &result {
            Ok(response) => {
                tracing::debug!("POST {} - status {}", url, response.status());
                timer.complete();
            }
            Err(e) => {
                tracing::error!("POST {} - error: {:?}", url, e);
                timer.complete_with_error();
            }
        }
        result
    }

    /// Execute a PUT request with authentication and JSON body.
    fn put(&self, path: &str, body: &serde_json::Value) -> Result<ureq::Response, StoreError> {
        let timer = HttpTimer::new(self.metrics.clone());
        let url = self.build_url(path);

        let result = self
            .agent
            .put(&url)
            .set("x-api-key", &self.api_key)
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        match &result {
            Ok(_) => timer.complete(),
            Err(_) => timer.complete_with_error(),
        }
        result
    }

    /// Execute a DELETE request with authentication.
    fn delete(&self, path: &str) -> Result<ureq::Response, StoreError> {
        let timer = HttpTimer::new(self.metrics.clone());
        let url = self.build_url(path);

        let result = self
            .agent
            .delete(&url)
            .set("x-api-key", &self.api_key)
            .call()
            .map_err(|e| self.map_error(e));

        match &result {
            Ok(_) => timer.complete(),
            Err(_) => timer.complete_with_error(),
        }
        result
    }

    /// Map a ureq error to a StoreError.
    fn map_error(&self, error: ureq::Error) -> StoreError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 => StoreError::Unauthorized,
                    404 => StoreError::NotFound(message),
                    429 => StoreError::RateLimitExceeded,
                    _ => StoreError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    StoreError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    StoreError::Timeout
                } else {
                    StoreError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Read and deserialize a JSON response body.
    fn read_json<T: DeserializeOwned>(response: ureq::Response) -> StoreResult<T> {
        let body = response
            .into_string()
            .map_err(|e| StoreError::HttpError(e.to_string()))?;
        serde_json::from_str(&body).map_err(StoreError::JsonError)
    }

    // ========================= Contact Operations =========================

    /// Create a new contact document. The store assigns the id and the
    /// creation timestamp and returns the full document.
    pub fn create_contact(&self, fields: &NewContact) -> StoreResult<ContactRecord> {
        let body = serde_json::to_value(fields).map_err(StoreError::JsonError)?;

        let response = self.post("/contacts", &body)?;
        let record: ContactRecord = Self::read_json(response)?;

        self.metrics.record_records_written(1);
        Ok(record)
    }

    /// Fetch a single contact by id. Returns `None` when the store reports
    /// no such document.
    pub fn get_contact(&self, id: &str) -> StoreResult<Option<ContactRecord>> {
        match self.get(&Self::contact_path(id)) {
            Ok(response) => {
                let record: ContactRecord = Self::read_json(response)?;
                self.metrics.record_records_fetched(1);
                Ok(Some(record))
            }
            Err(StoreError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// List all contacts, newest first. The ordering is performed by the
    /// store via the sort expression.
    pub fn list_contacts(&self) -> StoreResult<Vec<ContactRecord>> {
        let path = format!("/contacts?sort={}", urlencoding::encode(SORT_NEWEST_FIRST));
        let response = self.get(&path)?;

        let contacts_response: ContactsResponse = Self::read_json(response)?;
        let contacts = contacts_response.contacts;

        self.metrics.record_records_fetched(contacts.len());
        Ok(contacts)
    }

    /// Full-document update by id, requesting the post-update document.
    /// Returns `None` when no document matched the id.
    pub fn update_contact(
        &self,
        id: &str,
        fields: &NewContact,
    ) -> StoreResult<Option<ContactRecord>> {
        let body = serde_json::to_value(fields).map_err(StoreError::JsonError)?;
        let path = format!("{}?return=after", Self::contact_path(id));

        match self.put(&path, &body) {
            Ok(response) => {
                let record: ContactRecord = Self::read_json(response)?;
                self.metrics.record_records_written(1);
                Ok(Some(record))
            }
            Err(StoreError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Delete a contact by id, requesting the pre-delete document.
    /// Returns `None` when no document matched the id.
    pub fn delete_contact(&self, id: &str) -> StoreResult<Option<ContactRecord>> {
        let path = format!("{}?return=before", Self::contact_path(id));

        match self.delete(&path) {
            Ok(response) => {
                let record: ContactRecord = Self::read_json(response)?;
                self.metrics.record_records_written(1);
                Ok(Some(record))
            }
            Err(StoreError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
