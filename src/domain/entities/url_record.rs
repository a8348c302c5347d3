//! URL record entity: a slug mapped to its target URL.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored slug-to-URL mapping.
///
/// `slug` is the primary key and never changes after creation. `full_url` and
/// `updated_at` are replaced by updates; `created_at` is set once.
///
/// Serializes with camelCase keys (`fullUrl`, `createdAt`, `updatedAt`), which
/// is also the shape returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlRecord {
    pub slug: String,
    pub full_url: String,
    #[serde(with = "crate::utils::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::utils::timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a record whose `created_at` and `updated_at` are both `now`.
    pub fn new(slug: impl Into<String>, full_url: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            slug: slug.into(),
            full_url: full_url.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Fields changed by an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlPatch {
    pub full_url: String,
    pub updated_at: DateTime<Utc>,
}
