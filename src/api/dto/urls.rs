//! DTOs for the `/urls` endpoints.

use serde::Serialize;
use serde_json::Value;

use crate::domain::entities::UrlRecord;

/// Request body for `POST /urls`.
///
/// Built from any JSON value, so a body of the wrong shape is reported as a
/// validation error rather than a malformed body.
#[derive(Debug, Default, PartialEq)]
pub struct CreateUrlRequest {
    pub slug: Option<String>,
    pub full_url: Option<String>,
}

impl CreateUrlRequest {
    pub fn from_json(body: &Value) -> Self {
        Self {
            slug: text_field(body, "slug"),
            full_url: url_field(body, "fullUrl"),
        }
    }
}

/// Request body for `PUT /urls/{slug}`.
#[derive(Debug, Default, PartialEq)]
pub struct UpdateUrlRequest {
    pub full_url: Option<String>,
}

impl UpdateUrlRequest {
    pub fn from_json(body: &Value) -> Self {
        Self {
            full_url: url_field(body, "fullUrl"),
        }
    }
}

/// Looks up `name` on an object body. Non-object bodies have no fields.
///
/// `null`, `false`, `0` and `""` read as absent.
fn field<'a>(body: &'a Value, name: &str) -> Option<&'a Value> {
    body.get(name).filter(|value| match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64() != Some(0.0),
        _ => true,
    })
}

/// A field that must be a string; other types read as absent.
fn text_field(body: &Value, name: &str) -> Option<String> {
    field(body, name).and_then(Value::as_str).map(str::to_string)
}

/// A URL field. Non-string values keep their JSON text, which is never an
/// absolute URL and so fails URL validation.
fn url_field(body: &Value, name: &str) -> Option<String> {
    field(body, name).map(|value| match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

/// Response body for `GET /urls`.
#[derive(Debug, Serialize)]
pub struct ListUrlsResponse {
    pub items: Vec<UrlRecord>,
    pub count: usize,
}

impl From<Vec<UrlRecord>> for ListUrlsResponse {
    fn from(items: Vec<UrlRecord>) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}

/// Plain confirmation body, e.g. after a delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
