//! URL repository implementations.
//!
//! - [`DynamoUrlRepository`] - DynamoDB table keyed by `slug`
//! - [`MemoryUrlRepository`] - Process-local map for development and tests

pub mod dynamo_url_repository;
pub mod memory_url_repository;

pub use dynamo_url_repository::DynamoUrlRepository;
pub use memory_url_repository::MemoryUrlRepository;

use std::sync::Arc;

use crate::config::{Config, StoreBackend};
use crate::domain::repositories::UrlRepository;

/// Builds the repository selected by the configuration.
///
/// Called once per process; the result is shared by every request.
pub async fn build_repository(config: &Config) -> Arc<dyn UrlRepository> {
    match config.store_backend {
        StoreBackend::DynamoDb => {
            let repository = DynamoUrlRepository::connect(
                config.table_name.clone(),
                config.dynamodb_endpoint.as_deref(),
            )
            .await;
            tracing::info!(table = %config.table_name, "Store: DynamoDB");
            Arc::new(repository)
        }
        StoreBackend::Memory => {
            tracing::warn!("Store: in-memory (records are lost on exit)");
            Arc::new(MemoryUrlRepository::new())
        }
    }
}
