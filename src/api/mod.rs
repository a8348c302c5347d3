//! API layer: the gateway event contract and its router.
//!
//! Requests arrive as an [`event::ApiEvent`] (from API Gateway directly, or
//! translated from HTTP by [`crate::routes`]) and leave as an
//! [`event::ApiResponse`].
//!
//! # Modules
//!
//! - [`event`] - Inbound event and outbound response types
//! - [`router`] - `(method, resource)` dispatch and the top-level fault guard
//! - [`handlers`] - One handler per operation
//! - [`dto`] - Request/response bodies
//! - [`response`] - JSON, redirect and CORS response builders
//! - [`middleware`] - Tower layers for the HTTP server

pub mod dto;
pub mod event;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
