//! Async wrapper around the synchronous StoreClient.
//!
//! This module provides an async interface to the synchronous StoreClient by
//! using `tokio::task::spawn_blocking` to run HTTP operations on a dedicated
//! thread pool, preventing blocking of the async runtime.

use crate::client::StoreClient;
use crate::error::{StoreError, StoreResult};
use crate::models::{ContactRecord, NewContact};
use async_trait::async_trait;
use std::sync::Arc;

/// Async wrapper trait for document-store client operations.
#[async_trait]
pub trait AsyncStoreClient: Send + Sync {
    async fn create_contact(&self, fields: &NewContact) -> StoreResult<ContactRecord>;
    async fn get_contact(&self, id: &str) -> StoreResult<Option<ContactRecord>>;
    async fn list_contacts(&self) -> StoreResult<Vec<ContactRecord>>;
    async fn update_contact(
        &self,
        id: &str,
        fields: &NewContact,
    ) -> StoreResult<Option<ContactRecord>>;
    async fn delete_contact(&self, id: &str) -> StoreResult<Option<ContactRecord>>;
}

/// Async wrapper around the synchronous StoreClient.
///
/// Uses `tokio::task::spawn_blocking` to run synchronous HTTP operations on
/// a dedicated thread pool.
#[derive(Clone)]
pub struct AsyncStoreClientImpl {
    client: Arc<StoreClient>,
}

impl AsyncStoreClientImpl {
    pub fn new(client: StoreClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncStoreClient for AsyncStoreClientImpl {
    async fn create_contact(&self, fields: &NewContact) -> StoreResult<ContactRecord> {
        let client = self.client.clone();
        let fields = fields.clone();

        tokio::task::spawn_blocking(move || client.create_contact(&fields))
            .await
            .map_err(|e| StoreError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn get_contact(&self, id: &str) -> StoreResult<Option<ContactRecord>> {
        let client = self.client.clone();
        let id = id.to_string();

        tokio::task::spawn_blocking(move || client.get_contact(&id))
            .await
            .map_err(|e| StoreError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn list_contacts(&self) -> StoreResult<Vec<ContactRecord>> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.list_contacts())
            .await
            .map_err(|e| StoreError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn update_contact(
        &self,
        id: &str,
        fields: &NewContact,
    ) -> StoreResult<Option<ContactRecord>> {
        let client = self.client.clone();
        let id = id.to_string();
        let fields = fields.clone();

        tokio::task::spawn_blocking(move || client.update_contact(&id, &fields))
            .await
            .map_err(|e| StoreError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn delete_contact(&self, id: &str) -> StoreResult<Option<ContactRecord>> {
        let client = self.client.clone();
        let id = id.to_string();

        tokio::task::spawn_blocking(move || client.delete_contact(&id))
            .await
            .map_err(|e| StoreError::HttpError(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    #[test]
    fn test_async_client_creation() {
        let config = Config {
            store_url: "https://store.example.com".to_string(),
            store_api_key: "test_key".to_string(),
            request_timeout: 10,
            log_level: "error".to_string(),
        };
        let client = StoreClient::new(&config);
        let async_client = AsyncStoreClientImpl::new(client);

        // Should be able to clone
        let _cloned = async_client.clone();
    }

    #[test]
    fn test_async_client_surfaces_connection_errors() {
        // Port 9 (discard) is not listening; the call must fail, not hang.
        let client =
            StoreClient::with_base_url("http://127.0.0.1:9".to_string(), "k".to_string());
        let async_client = AsyncStoreClientImpl::new(client);

        let result = tokio_test::block_on(async_client.list_contacts());
        assert!(result.is_err());
    }
}
