use crate::domain::ContactId;
use crate::error::StoreResult;
use crate::models::{ContactRecord, NewContact};
use async_trait::async_trait;

/// Repository for managing contact records.
///
/// Provides abstraction over record storage and retrieval,
/// enabling different implementations (store client, mock).
///
/// Absence is signalled with `Ok(None)`, never with an error: the store's
/// "no matching document" answer is a normal outcome for find, update, and
/// delete.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Persist a new record. The store assigns the id and creation timestamp.
    async fn create(&self, fields: &NewContact) -> StoreResult<ContactRecord>;

    /// Retrieve a single record by id.
    async fn find_by_id(&self, id: &ContactId) -> StoreResult<Option<ContactRecord>>;

    /// Retrieve all records, newest first by creation time.
    async fn list_all(&self) -> StoreResult<Vec<ContactRecord>>;

    /// Full-document update by id, returning the post-update record.
    async fn update(
        &self,
        id: &ContactId,
        fields: &NewContact,
    ) -> StoreResult<Option<ContactRecord>>;

    /// Delete by id, returning the record as it was before deletion.
    async fn delete(&self, id: &ContactId) -> StoreResult<Option<ContactRecord>>;
}
