//! Gateway event and response types.
//!
//! These mirror the API Gateway REST proxy integration shapes, so the Lambda
//! entry point deserializes events and serializes responses directly, and the
//! Axum server builds the same values from plain HTTP requests.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// A normalized inbound request.
///
/// `resource` is the matched route pattern (`/urls` or `/urls/{slug}`), not
/// the concrete path; the slug arrives in `path_parameters`.
///
/// The proxy's `isBase64Encoded` flag is not read: `body` is always taken as
/// JSON text, so binary media types must stay disabled on the gateway.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEvent {
    #[serde(default)]
    pub http_method: String,
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub path_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
}

impl ApiEvent {
    pub fn new(http_method: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            http_method: http_method.into(),
            resource: resource.into(),
            ..Self::default()
        }
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.path_parameters
            .get_or_insert_with(HashMap::new)
            .insert("slug".to_string(), slug.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// The `slug` path parameter, if the gateway supplied one.
    pub fn slug(&self) -> Option<&str> {
        self.path_parameters
            .as_ref()
            .and_then(|params| params.get("slug"))
            .map(String::as_str)
    }
}

/// A normalized outbound response.
///
/// `body` is JSON text for every response except redirects, where it is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl ApiResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
