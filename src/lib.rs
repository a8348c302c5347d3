//! # Shortlink API
//!
//! A slug-to-URL shortening CRUD API backed by DynamoDB. Each record maps a
//! caller-chosen slug to a full URL; `GET /urls/{slug}` redirects to it.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - URL records and the repository trait
//! - **Application Layer** ([`application`]) - Validation and operation semantics
//! - **Infrastructure Layer** ([`infrastructure`]) - DynamoDB and in-memory stores
//! - **API Layer** ([`api`]) - Gateway events, routing, handlers and DTOs
//!
//! ## Entry Points
//!
//! - `lambda` - AWS Lambda behind an API Gateway proxy integration
//! - `shortlink-api` - Standalone Axum server ([`server`], [`routes`])
//! - `admin` - Command-line management of records
//!
//! All three dispatch through [`api::router::handle_event`], so responses are
//! identical regardless of how a request arrives.
//!
//! ## Quick Start
//!
//! ```bash
//! # In-memory store, no AWS account needed
//! export STORE_BACKEND=memory
//! cargo run
//!
//! curl -X POST localhost:3000/urls \
//!     -H 'Content-Type: application/json' \
//!     -d '{"slug":"ab12","fullUrl":"https://example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::api::event::{ApiEvent, ApiResponse};
    pub use crate::api::router::handle_event;
    pub use crate::application::services::UrlService;
    pub use crate::domain::entities::{UrlPatch, UrlRecord};
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::error::{AppError, StoreError};
    pub use crate::state::AppState;
}
