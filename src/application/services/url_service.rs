//! URL record lifecycle service.

use std::sync::Arc;

use crate::domain::entities::{UrlPatch, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::{AppError, StoreError};
use crate::utils::timestamp;
use crate::utils::url_validator::validate_full_url;

/// Service implementing create, list, resolve, update and delete of slugs.
///
/// Validation happens before any store call. Store failures are logged here
/// with their cause; callers only see the operation-specific message.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
}

impl UrlService {
    /// Creates a new URL service over the given store.
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self { repository }
    }

    /// Stores a new slug pointing at `full_url`.
    ///
    /// A lookup runs first so an existing slug is reported without a write;
    /// if that lookup fails it is only logged. The write itself is conditional
    /// on the slug being absent.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if either field is missing/empty or the URL
    ///   does not parse
    /// - [`AppError::Conflict`] if the slug already exists
    /// - [`AppError::Internal`] if the write fails
    pub async fn create_url(
        &self,
        slug: Option<&str>,
        full_url: Option<&str>,
    ) -> Result<UrlRecord, AppError> {
        let (Some(slug), Some(full_url)) = (non_empty(slug), non_empty(full_url)) else {
            return Err(AppError::bad_request(
                "Missing required fields: slug and fullUrl",
            ));
        };

        check_url(full_url)?;

        match self.repository.find_by_slug(slug).await {
            Ok(Some(_)) => return Err(AppError::conflict("Slug already exists")),
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, slug, "Error checking existing slug");
            }
        }

        let record = UrlRecord::new(slug, full_url, timestamp::now());

        match self.repository.create(record.clone()).await {
            Ok(()) => {
                tracing::info!(slug, "URL created");
                Ok(record)
            }
            Err(StoreError::ConditionFailed) => Err(AppError::conflict("Slug already exists")),
            Err(e) => {
                tracing::error!(error = %e, slug, "Error creating URL");
                Err(AppError::internal("Failed to create URL"))
            }
        }
    }

    /// Returns every stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the scan fails.
    pub async fn list_urls(&self) -> Result<Vec<UrlRecord>, AppError> {
        self.repository.list().await.map_err(|e| {
            tracing::error!(error = %e, "Error listing URLs");
            AppError::internal("Failed to list URLs")
        })
    }

    /// Looks up the record a slug redirects to.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the slug is not stored
    /// - [`AppError::Internal`] if the lookup fails
    pub async fn get_url(&self, slug: &str) -> Result<UrlRecord, AppError> {
        match self.repository.find_by_slug(slug).await {
            Ok(Some(record)) => Ok(record),
            Ok(None) => Err(AppError::not_found("URL not found")),
            Err(e) => {
                tracing::error!(error = %e, slug, "Error getting URL");
                Err(AppError::internal("Failed to get URL"))
            }
        }
    }

    /// Points an existing slug at a new URL and refreshes `updatedAt`.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if `full_url` is missing/empty or does not
    ///   parse, whether or not the slug exists
    /// - [`AppError::NotFound`] if the slug is not stored
    /// - [`AppError::Internal`] if the update fails
    pub async fn update_url(
        &self,
        slug: &str,
        full_url: Option<&str>,
    ) -> Result<UrlRecord, AppError> {
        let Some(full_url) = non_empty(full_url) else {
            return Err(AppError::bad_request("Missing required field: fullUrl"));
        };

        check_url(full_url)?;

        let patch = UrlPatch {
            full_url: full_url.to_string(),
            updated_at: timestamp::now(),
        };

        match self.repository.update(slug, patch).await {
            Ok(record) => {
                tracing::info!(slug, "URL updated");
                Ok(record)
            }
            Err(StoreError::ConditionFailed) => Err(AppError::not_found("URL not found")),
            Err(e) => {
                tracing::error!(error = %e, slug, "Error updating URL");
                Err(AppError::internal("Failed to update URL"))
            }
        }
    }

    /// Removes an existing slug.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the slug is not stored
    /// - [`AppError::Internal`] if the delete fails
    pub async fn delete_url(&self, slug: &str) -> Result<(), AppError> {
        match self.repository.delete(slug).await {
            Ok(()) => {
                tracing::info!(slug, "URL deleted");
                Ok(())
            }
            Err(StoreError::ConditionFailed) => Err(AppError::not_found("URL not found")),
            Err(e) => {
                tracing::error!(error = %e, slug, "Error deleting URL");
                Err(AppError::internal("Failed to delete URL"))
            }
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn check_url(full_url: &str) -> Result<(), AppError> {
    validate_full_url(full_url).map_err(|e| {
        tracing::debug!(error = %e, full_url, "Rejected URL");
        AppError::bad_request("Invalid URL format")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;
    use chrono::{Duration, Utc};

    fn service(repo: MockUrlRepository) -> UrlService {
        UrlService::new(Arc::new(repo))
    }

    fn stored(slug: &str, url: &str) -> UrlRecord {
        UrlRecord::new(slug, url, Utc::now() - Duration::hours(1))
    }

    #[tokio::test]
    async fn test_create_url_success() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_slug()
            .withf(|slug| slug == "ab12")
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_create()
            .withf(|r| r.slug == "ab12" && r.full_url == "https://example.com")
            .times(1)
            .returning(|_| Ok(()));

        let record = service(repo)
            .create_url(Some("ab12"), Some("https://example.com"))
            .await
            .unwrap();

        assert_eq!(record.slug, "ab12");
        assert_eq!(record.full_url, "https://example.com");
        assert_eq!(record.created_at, record.updated_at);
    }

    #[tokio::test]
    async fn test_create_url_missing_fields_never_touch_store() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_slug().times(0);
        repo.expect_create().times(0);
        let service = service(repo);

        for (slug, url) in [
            (None, Some("https://example.com")),
            (Some("ab12"), None),
            (Some(""), Some("https://example.com")),
            (Some("ab12"), Some("")),
        ] {
            let err = service.create_url(slug, url).await.unwrap_err();
            assert_eq!(
                err,
                AppError::bad_request("Missing required fields: slug and fullUrl")
            );
        }
    }

    #[tokio::test]
    async fn test_create_url_invalid_url() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_slug().times(0);
        repo.expect_create().times(0);

        let err = service(repo)
            .create_url(Some("ab12"), Some("not-a-url"))
            .await
            .unwrap_err();

        assert_eq!(err, AppError::bad_request("Invalid URL format"));
    }

    #[tokio::test]
    async fn test_create_url_existing_slug_conflicts() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_slug()
            .times(1)
            .returning(|_| Ok(Some(stored("ab12", "https://old.example.com"))));
        repo.expect_create().times(0);

        let err = service(repo)
            .create_url(Some("ab12"), Some("https://example.com"))
            .await
            .unwrap_err();

        assert_eq!(err, AppError::conflict("Slug already exists"));
    }

    #[tokio::test]
    async fn test_create_url_lookup_failure_still_creates() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_slug()
            .times(1)
            .returning(|_| Err(StoreError::backend("timeout")));
        repo.expect_create().times(1).returning(|_| Ok(()));

        let result = service(repo)
            .create_url(Some("ab12"), Some("https://example.com"))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_url_lost_race_conflicts() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_slug().times(1).returning(|_| Ok(None));
        repo.expect_create()
            .times(1)
            .returning(|_| Err(StoreError::ConditionFailed));

        let err = service(repo)
            .create_url(Some("ab12"), Some("https://example.com"))
            .await
            .unwrap_err();

        assert_eq!(err, AppError::conflict("Slug already exists"));
    }

    #[tokio::test]
    async fn test_create_url_write_failure() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_slug().times(1).returning(|_| Ok(None));
        repo.expect_create()
            .times(1)
            .returning(|_| Err(StoreError::backend("throttled")));

        let err = service(repo)
            .create_url(Some("ab12"), Some("https://example.com"))
            .await
            .unwrap_err();

        assert_eq!(err, AppError::internal("Failed to create URL"));
    }

    #[tokio::test]
    async fn test_list_urls() {
        let mut repo = MockUrlRepository::new();
        repo.expect_list().times(1).returning(|| {
            Ok(vec![
                stored("a", "https://a.example.com"),
                stored("b", "https://b.example.com"),
            ])
        });

        let records = service(repo).list_urls().await.unwrap();
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn test_list_urls_failure() {
        let mut repo = MockUrlRepository::new();
        repo.expect_list()
            .times(1)
            .returning(|| Err(StoreError::backend("boom")));

        let err = service(repo).list_urls().await.unwrap_err();
        assert_eq!(err, AppError::internal("Failed to list URLs"));
    }

    #[tokio::test]
    async fn test_get_url() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_slug()
            .withf(|slug| slug == "ab12")
            .times(1)
            .returning(|_| Ok(Some(stored("ab12", "https://example.com"))));

        let record = service(repo).get_url("ab12").await.unwrap();
        assert_eq!(record.full_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_get_url_not_found() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_slug().times(1).returning(|_| Ok(None));

        let err = service(repo).get_url("nope").await.unwrap_err();
        assert_eq!(err, AppError::not_found("URL not found"));
    }

    #[tokio::test]
    async fn test_get_url_failure() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_slug()
            .times(1)
            .returning(|_| Err(StoreError::backend("boom")));

        let err = service(repo).get_url("ab12").await.unwrap_err();
        assert_eq!(err, AppError::internal("Failed to get URL"));
    }

    #[tokio::test]
    async fn test_update_url_success() {
        let mut repo = MockUrlRepository::new();
        let before = stored("ab12", "https://example.com");
        let created_at = before.created_at;
        repo.expect_update()
            .withf(|slug, patch| slug == "ab12" && patch.full_url == "https://example.org")
            .times(1)
            .returning(move |_, patch| {
                Ok(UrlRecord {
                    full_url: patch.full_url,
                    updated_at: patch.updated_at,
                    ..before.clone()
                })
            });

        let record = service(repo)
            .update_url("ab12", Some("https://example.org"))
            .await
            .unwrap();

        assert_eq!(record.full_url, "https://example.org");
        assert_eq!(record.created_at, created_at);
        assert!(record.updated_at >= record.created_at);
    }

    #[tokio::test]
    async fn test_update_url_validation_never_touches_store() {
        let mut repo = MockUrlRepository::new();
        repo.expect_update().times(0);
        let service = service(repo);

        let err = service.update_url("ab12", None).await.unwrap_err();
        assert_eq!(err, AppError::bad_request("Missing required field: fullUrl"));

        let err = service.update_url("ab12", Some("")).await.unwrap_err();
        assert_eq!(err, AppError::bad_request("Missing required field: fullUrl"));

        let err = service
            .update_url("ab12", Some("not-a-url"))
            .await
            .unwrap_err();
        assert_eq!(err, AppError::bad_request("Invalid URL format"));
    }

    #[tokio::test]
    async fn test_update_url_missing_slug() {
        let mut repo = MockUrlRepository::new();
        repo.expect_update()
            .times(1)
            .returning(|_, _| Err(StoreError::ConditionFailed));

        let err = service(repo)
            .update_url("ghost", Some("https://example.org"))
            .await
            .unwrap_err();

        assert_eq!(err, AppError::not_found("URL not found"));
    }

    #[tokio::test]
    async fn test_update_url_failure() {
        let mut repo = MockUrlRepository::new();
        repo.expect_update()
            .times(1)
            .returning(|_, _| Err(StoreError::backend("boom")));

        let err = service(repo)
            .update_url("ab12", Some("https://example.org"))
            .await
            .unwrap_err();

        assert_eq!(err, AppError::internal("Failed to update URL"));
    }

    #[tokio::test]
    async fn test_delete_url() {
        let mut repo = MockUrlRepository::new();
        repo.expect_delete()
            .withf(|slug| slug == "ab12")
            .times(1)
            .returning(|_| Ok(()));

        assert!(service(repo).delete_url("ab12").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_url_missing_slug() {
        let mut repo = MockUrlRepository::new();
        repo.expect_delete()
            .times(1)
            .returning(|_| Err(StoreError::ConditionFailed));

        let err = service(repo).delete_url("ghost").await.unwrap_err();
        assert_eq!(err, AppError::not_found("URL not found"));
    }

    #[tokio::test]
    async fn test_delete_url_failure() {
        let mut repo = MockUrlRepository::new();
        repo.expect_delete()
            .times(1)
            .returning(|_| Err(StoreError::backend("boom")));

        let err = service(repo).delete_url("ab12").await.unwrap_err();
        assert_eq!(err, AppError::internal("Failed to delete URL"));
    }
}
