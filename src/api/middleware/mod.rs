//! Tower middleware for the HTTP server.
//!
//! Provides request tracing and the panic guard.

pub mod catch_panic;
pub mod tracing;
