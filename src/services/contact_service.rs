//! Contact service layer.
//!
//! The contact manager binds draft validation to the persistence layer:
//! every write operation validates its draft first, and validation failures
//! stay on the draft instead of becoming errors.

use crate::domain::ContactId;
use crate::error::StoreResult;
use crate::models::{ContactDraft, ContactRecord};
use crate::repositories::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Contact service trait for record operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Validate the draft and, if clean, persist it as a new record.
    ///
    /// On validation failure the draft's result slot stays empty and the
    /// messages are left on the draft for the caller to inspect; no store
    /// call is made. On success the created record (with store-assigned id
    /// and timestamp) lands in the draft's result slot.
    async fn register(&self, draft: &mut ContactDraft) -> StoreResult<()>;

    /// Validate the draft and, if clean, replace the mutable fields of the
    /// record with the given id.
    ///
    /// The post-update document lands in the draft's result slot. Editing an
    /// id that matches no record leaves the slot empty; it is not an error.
    async fn edit(&self, draft: &mut ContactDraft, id: &ContactId) -> StoreResult<()>;

    /// Fetch a single record by id, `None` when absent.
    async fn find_by_id(&self, id: &ContactId) -> StoreResult<Option<ContactRecord>>;

    /// All records, newest first.
    async fn list_all(&self) -> StoreResult<Vec<ContactRecord>>;

    /// Delete by id, returning the deleted record, `None` when absent.
    async fn delete(&self, id: &ContactId) -> StoreResult<Option<ContactRecord>>;
}

/// Default implementation of ContactService over a repository.
pub struct ContactManager {
    repository: Arc<dyn ContactRepository>,
}

impl ContactManager {
    /// Create a new contact manager.
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ContactService for ContactManager {
    async fn register(&self, draft: &mut ContactDraft) -> StoreResult<()> {
        draft.validate();
        if !draft.is_valid() {
            debug!(errors = draft.errors().len(), "register rejected by validation");
            return Ok(());
        }

        let created = self.repository.create(&draft.to_new_contact()).await?;
        debug!(id = %created.id, "contact registered");
        draft.set_record(created);
        Ok(())
    }

    async fn edit(&self, draft: &mut ContactDraft, id: &ContactId) -> StoreResult<()> {
        draft.validate();
        if !draft.is_valid() {
            debug!(%id, errors = draft.errors().len(), "edit rejected by validation");
            return Ok(());
        }

        match self.repository.update(id, &draft.to_new_contact()).await? {
            Some(updated) => {
                debug!(%id, "contact updated");
                draft.set_record(updated);
            }
            None => debug!(%id, "edit matched no record"),
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &ContactId) -> StoreResult<Option<ContactRecord>> {
        self.repository.find_by_id(id).await
    }

    async fn list_all(&self) -> StoreResult<Vec<ContactRecord>> {
        self.repository.list_all().await
    }

    async fn delete(&self, id: &ContactId) -> StoreResult<Option<ContactRecord>> {
        let deleted = self.repository.delete(id).await?;
        if deleted.is_some() {
            debug!(%id, "contact deleted");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{AsyncStoreClient, AsyncStoreClientImpl};
    use crate::config::Config;
    use crate::repositories::HttpContactRepository;
    use crate::StoreClient;

    #[test]
    fn test_contact_manager_creation() {
        let config = Config::default();
        let sync_client = StoreClient::new(&config);
        let client = Arc::new(AsyncStoreClientImpl::new(sync_client)) as Arc<dyn AsyncStoreClient>;

        let repository =
            Arc::new(HttpContactRepository::new(client)) as Arc<dyn ContactRepository>;

        let _manager = ContactManager::new(repository);
        // Just verify it constructs without panic
    }
}
