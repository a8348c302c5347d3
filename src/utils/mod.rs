//! Helpers shared across layers.
//!
//! - [`timestamp`] - Millisecond-precision ISO-8601 timestamps
//! - [`url_validator`] - Absolute URL validation

pub mod timestamp;
pub mod url_validator;
