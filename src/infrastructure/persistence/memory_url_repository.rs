//! In-process implementation of the URL repository.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{UrlPatch, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::StoreError;

/// A repository holding records in a process-local map.
///
/// Conditional writes are checked and applied under one write lock, so they
/// behave like the DynamoDB condition expressions. Contents are lost when the
/// process exits.
#[derive(Default)]
pub struct MemoryUrlRepository {
    records: RwLock<HashMap<String, UrlRecord>>,
}

impl MemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<UrlRecord>, StoreError> {
        Ok(self.records.read().await.get(slug).cloned())
    }

    async fn create(&self, record: UrlRecord) -> Result<(), StoreError> {
        match self.records.write().await.entry(record.slug.clone()) {
            Entry::Occupied(_) => Err(StoreError::ConditionFailed),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    async fn list(&self) -> Result<Vec<UrlRecord>, StoreError> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn update(&self, slug: &str, patch: UrlPatch) -> Result<UrlRecord, StoreError> {
        let mut records = self.records.write().await;
        let record = records.get_mut(slug).ok_or(StoreError::ConditionFailed)?;

        record.full_url = patch.full_url;
        record.updated_at = patch.updated_at;

        Ok(record.clone())
    }

    async fn delete(&self, slug: &str) -> Result<(), StoreError> {
        self.records
            .write()
            .await
            .remove(slug)
            .map(|_| ())
            .ok_or(StoreError::ConditionFailed)
    }
}
