//! Core domain entities.
//!
//! - [`UrlRecord`] - A slug mapped to its full target URL
//! - [`UrlPatch`] - The fields an update replaces

pub mod url_record;

pub use url_record::{UrlPatch, UrlRecord};
