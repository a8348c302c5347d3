//! Application layer services implementing business logic.
//!
//! Services validate input, call repository traits, and translate store
//! outcomes into caller-facing errors. Handlers and the admin CLI both go
//! through them.
//!
//! - [`services::url_service::UrlService`] - Slug creation, lookup, update and removal

pub mod services;
