//! Repository trait for URL record storage.

use crate::domain::entities::{UrlPatch, UrlRecord};
use crate::error::StoreError;
use async_trait::async_trait;

/// Key-value store of [`UrlRecord`]s keyed by slug.
///
/// Existence-gated writes report an unmet precondition as
/// [`StoreError::ConditionFailed`], distinct from infrastructure failures
/// ([`StoreError::Backend`]).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::DynamoUrlRepository`] - DynamoDB table
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - Process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Looks up a record by slug.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on store failures.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<UrlRecord>, StoreError>;

    /// Inserts a record only if its slug is not stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ConditionFailed`] if the slug already exists.
    /// Returns [`StoreError::Backend`] on store failures.
    async fn create(&self, record: UrlRecord) -> Result<(), StoreError>;

    /// Returns every stored record, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on store failures.
    async fn list(&self) -> Result<Vec<UrlRecord>, StoreError>;

    /// Applies `patch` to an existing record and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ConditionFailed`] if the slug does not exist.
    /// Returns [`StoreError::Backend`] on store failures.
    async fn update(&self, slug: &str, patch: UrlPatch) -> Result<UrlRecord, StoreError>;

    /// Removes an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ConditionFailed`] if the slug does not exist.
    /// Returns [`StoreError::Backend`] on store failures.
    async fn delete(&self, slug: &str) -> Result<(), StoreError>;
}
