//! Handlers for the `/urls` operations.
//!
//! Each handler turns one operation's outcome into an [`ApiResponse`]. Only
//! create and update read the body; a body that is not JSON, or is JSON
//! `null`, is returned as an `Err` and left to the top-level guard in
//! [`crate::api::router`]. Any other JSON value is accepted and its fields
//! are validated by the service.

use anyhow::Context;
use serde_json::Value;

use crate::api::dto::urls::{CreateUrlRequest, ListUrlsResponse, MessageResponse, UpdateUrlRequest};
use crate::api::event::ApiResponse;
use crate::api::response::{json_response, redirect_response};
use crate::application::services::UrlService;

/// Creates a slug.
///
/// # Endpoint
///
/// `POST /urls`
///
/// # Request Body
///
/// ```json
/// { "slug": "ab12", "fullUrl": "https://example.com" }
/// ```
///
/// # Responses
///
/// - **201** with the stored record
/// - **400** missing field or invalid URL
/// - **409** slug already exists
/// - **500** store failure
pub async fn create_url_handler(
    service: &UrlService,
    body: Option<&str>,
) -> anyhow::Result<ApiResponse> {
    let payload = CreateUrlRequest::from_json(&parse_body(body)?);

    let response = match service
        .create_url(payload.slug.as_deref(), payload.full_url.as_deref())
        .await
    {
        Ok(record) => json_response(201, &record),
        Err(e) => e.into_response(),
    };

    Ok(response)
}

/// Lists every slug.
///
/// # Endpoint
///
/// `GET /urls`
///
/// # Response
///
/// ```json
/// { "items": [ { "slug": "ab12", "fullUrl": "...", "createdAt": "...", "updatedAt": "..." } ], "count": 1 }
/// ```
pub async fn list_urls_handler(service: &UrlService) -> ApiResponse {
    match service.list_urls().await {
        Ok(records) => json_response(200, &ListUrlsResponse::from(records)),
        Err(e) => e.into_response(),
    }
}

/// Redirects a slug to its target.
///
/// # Endpoint
///
/// `GET /urls/{slug}`
///
/// Returns **302** with `Location` set to the stored URL, or a JSON **404**
/// when the slug is unknown.
pub async fn redirect_handler(service: &UrlService, slug: &str) -> ApiResponse {
    match service.get_url(slug).await {
        Ok(record) => redirect_response(&record.full_url),
        Err(e) => e.into_response(),
    }
}

/// Points a slug at a new URL.
///
/// # Endpoint
///
/// `PUT /urls/{slug}`
///
/// # Request Body
///
/// ```json
/// { "fullUrl": "https://example.org" }
/// ```
pub async fn update_url_handler(
    service: &UrlService,
    slug: &str,
    body: Option<&str>,
) -> anyhow::Result<ApiResponse> {
    let payload = UpdateUrlRequest::from_json(&parse_body(body)?);

    let response = match service.update_url(slug, payload.full_url.as_deref()).await {
        Ok(record) => json_response(200, &record),
        Err(e) => e.into_response(),
    };

    Ok(response)
}

/// Removes a slug.
///
/// # Endpoint
///
/// `DELETE /urls/{slug}`
pub async fn delete_url_handler(service: &UrlService, slug: &str) -> ApiResponse {
    match service.delete_url(slug).await {
        Ok(()) => json_response(
            200,
            &MessageResponse {
                message: "URL deleted successfully".to_string(),
            },
        ),
        Err(e) => e.into_response(),
    }
}

/// Answers a CORS preflight on any resource.
pub fn preflight_handler() -> ApiResponse {
    json_response(200, &serde_json::json!({}))
}

/// Answers any (method, resource) pair without an operation.
pub fn route_not_found_handler() -> ApiResponse {
    json_response(404, &serde_json::json!({ "error": "Route not found" }))
}

/// Parses a JSON body; an absent or empty body reads as `{}`.
fn parse_body(body: Option<&str>) -> anyhow::Result<Value> {
    let raw = body.filter(|b| !b.is_empty()).unwrap_or("{}");
    let value: Value = serde_json::from_str(raw).context("Failed to parse request body")?;
    anyhow::ensure!(!value.is_null(), "Request body is null");
    Ok(value)
}
