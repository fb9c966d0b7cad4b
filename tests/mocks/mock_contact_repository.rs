use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use contact_keeper::domain::ContactId;
use contact_keeper::error::StoreResult;
use contact_keeper::models::{ContactRecord, NewContact};
use contact_keeper::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that mimics the
/// document store's behavior (id and timestamp assignment, newest-first
/// listing, not-found as None) and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    records: Arc<Mutex<HashMap<String, ContactRecord>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    sequence: Arc<AtomicU64>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            sequence: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Seed the repository with an existing record.
    pub fn add_record(&self, record: ContactRecord) {
        let mut records = self.records.lock().unwrap();
        records.insert(record.id.as_str().to_string(), record);
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    /// Clear all records from the repository.
    pub fn clear(&self) {
        let mut records = self.records.lock().unwrap();
        records.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn create(&self, fields: &NewContact) -> StoreResult<ContactRecord> {
        self.track_call("create");

        // Monotonic sequence keeps ids unique and newest-first ordering
        // deterministic even when several creates land in the same instant.
        let n = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let record = ContactRecord {
            id: ContactId::new(format!("contact_{}", n)).unwrap(),
            first_name: fields.first_name.clone(),
            last_name: fields.last_name.clone(),
            email: fields.email.clone(),
            phone: fields.phone.clone(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
                + Duration::seconds(n as i64),
        };

        let mut records = self.records.lock().unwrap();
        records.insert(record.id.as_str().to_string(), record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: &ContactId) -> StoreResult<Option<ContactRecord>> {
        self.track_call("find_by_id");

        let records = self.records.lock().unwrap();
        Ok(records.get(id.as_str()).cloned())
    }

    async fn list_all(&self) -> StoreResult<Vec<ContactRecord>> {
        self.track_call("list_all");

        let records = self.records.lock().unwrap();
        let mut all: Vec<ContactRecord> = records.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn update(
        &self,
        id: &ContactId,
        fields: &NewContact,
    ) -> StoreResult<Option<ContactRecord>> {
        self.track_call("update");

        let mut records = self.records.lock().unwrap();
        match records.get_mut(id.as_str()) {
            Some(record) => {
                record.first_name = fields.first_name.clone();
                record.last_name = fields.last_name.clone();
                record.email = fields.email.clone();
                record.phone = fields.phone.clone();
                Ok(Some(record.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &ContactId) -> StoreResult<Option<ContactRecord>> {
        self.track_call("delete");

        let mut records = self.records.lock().unwrap();
        Ok(records.remove(id.as_str()))
    }
}
