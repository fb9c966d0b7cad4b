use crate::client::AsyncStoreClient;
use crate::domain::ContactId;
use crate::error::StoreResult;
use crate::models::{ContactRecord, NewContact};
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Contact repository backed by the document-store HTTP client.
///
/// This repository delegates all operations to the AsyncStoreClient,
/// providing a clean abstraction layer between the manager and the
/// underlying HTTP client.
pub struct HttpContactRepository {
    client: Arc<dyn AsyncStoreClient>,
}

impl HttpContactRepository {
    /// Create a new HttpContactRepository with the given client.
    pub fn new(client: Arc<dyn AsyncStoreClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContactRepository for HttpContactRepository {
    async fn create(&self, fields: &NewContact) -> StoreResult<ContactRecord> {
        self.client.create_contact(fields).await
    }

    async fn find_by_id(&self, id: &ContactId) -> StoreResult<Option<ContactRecord>> {
        self.client.get_contact(id.as_str()).await
    }

    async fn list_all(&self) -> StoreResult<Vec<ContactRecord>> {
        self.client.list_contacts().await
    }

    async fn update(
        &self,
        id: &ContactId,
        fields: &NewContact,
    ) -> StoreResult<Option<ContactRecord>> {
        self.client.update_contact(id.as_str(), fields).await
    }

    async fn delete(&self, id: &ContactId) -> StoreResult<Option<ContactRecord>> {
        self.client.delete_contact(id.as_str()).await
    }
}
