#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use std::sync::Arc;
use shortlink_api::application::services::UrlService;
use shortlink_api::domain::entities::{UrlPatch, UrlRecord};
use shortlink_api::domain::repositories::UrlRepository;
use shortlink_api::error::StoreError;
use shortlink_api::infrastructure::persistence::MemoryUrlRepository;
use shortlink_api::routes::app_router;
use shortlink_api::state::AppState;

/// Repository whose every call fails with a backend error.
pub struct FailingRepository;

#[async_trait]
impl UrlRepository for FailingRepository {
    async fn find_by_slug(&self, _slug: &str) -> Result<Option<UrlRecord>, StoreError> {
        Err(StoreError::backend("connection refused"))
    }

    async fn create(&self, _record: UrlRecord) -> Result<(), StoreError> {
        Err(StoreError::backend("connection refused"))
    }

    async fn list(&self) -> Result<Vec<UrlRecord>, StoreError> {
        Err(StoreError::backend("connection refused"))
    }

    async fn update(&self, _slug: &str, _patch: UrlPatch) -> Result<UrlRecord, StoreError> {
        Err(StoreError::backend("connection refused"))
    }

    async fn delete(&self, _slug: &str) -> Result<(), StoreError> {
        Err(StoreError::backend("connection refused"))
    }
}

pub fn create_test_state(repository: Arc<dyn UrlRepository>) -> AppState {
    AppState::new(Arc::new(UrlService::new(repository)))
}

pub fn create_test_server() -> TestServer {
    server_with(Arc::new(MemoryUrlRepository::new()))
}

pub fn create_failing_server() -> TestServer {
    server_with(Arc::new(FailingRepository))
}

fn server_with(repository: Arc<dyn UrlRepository>) -> TestServer {
    TestServer::new(app_router(create_test_state(repository))).unwrap()
}

pub async fn create_test_url(server: &TestServer, slug: &str, full_url: &str) {
    server
        .post("/urls")
        .json(&serde_json::json!({ "slug": slug, "fullUrl": full_url }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);
}
