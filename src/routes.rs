//! HTTP front end: translates plain HTTP requests into gateway events.
//!
//! # Route Structure
//!
//! - `/urls`         - any method, dispatched as resource `/urls`
//! - `/urls/{slug}`  - any method, dispatched as resource `/urls/{slug}`
//! - anything else   - dispatched with the raw path as resource, which the
//!   event router answers with `404 Route not found` (or 200 for `OPTIONS`)
//!
//! Method/resource matching, bodies, status codes and headers are all decided
//! by [`crate::api::router::handle_event`], so this server and the Lambda
//! entry point behave identically.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Panic guard** - Panics become `500 Internal server error`

use axum::body::{Body, Bytes};
use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;

use crate::api::event::{ApiEvent, ApiResponse};
use crate::api::middleware::{catch_panic, tracing};
use crate::api::router::{handle_event, URLS_RESOURCE, URL_BY_SLUG_RESOURCE};
use crate::state::AppState;

/// Constructs the application router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/urls", any(urls_handler))
        .route("/urls/{slug}", any(url_by_slug_handler))
        .fallback(fallback_handler)
        .with_state(state)
        .layer(catch_panic::layer())
        .layer(tracing::layer())
}

async fn urls_handler(State(state): State<AppState>, method: Method, body: Bytes) -> ApiResponse {
    let event = to_event(&method, URLS_RESOURCE, None, &body);
    handle_event(&state.url_service, event).await
}

async fn url_by_slug_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    method: Method,
    body: Bytes,
) -> ApiResponse {
    let event = to_event(&method, URL_BY_SLUG_RESOURCE, Some(slug), &body);
    handle_event(&state.url_service, event).await
}

async fn fallback_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> ApiResponse {
    let event = to_event(&method, uri.path(), None, &body);
    handle_event(&state.url_service, event).await
}

fn to_event(method: &Method, resource: &str, slug: Option<String>, body: &[u8]) -> ApiEvent {
    let mut event = ApiEvent::new(method.as_str(), resource);

    if let Some(slug) = slug {
        event = event.with_slug(slug);
    }

    if !body.is_empty() {
        event = event.with_body(String::from_utf8_lossy(body));
    }

    event
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut headers = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            match (
                HeaderName::try_from(name.as_str()),
                HeaderValue::try_from(value.as_str()),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => ::tracing::warn!(header = %name, "Dropping invalid response header"),
            }
        }

        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_event() {
        let event = to_event(&Method::PUT, URL_BY_SLUG_RESOURCE, Some("ab12".into()), b"{}");

        assert_eq!(event.http_method, "PUT");
        assert_eq!(event.resource, "/urls/{slug}");
        assert_eq!(event.slug(), Some("ab12"));
        assert_eq!(event.body.as_deref(), Some("{}"));
    }

    #[test]
    fn test_to_event_without_body() {
        let event = to_event(&Method::GET, URLS_RESOURCE, None, b"");

        assert_eq!(event.slug(), None);
        assert!(event.body.is_none());
    }

    #[test]
    fn test_api_response_into_http() {
        let api = crate::api::response::redirect_response("https://example.com");
        let response = api.into_response();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()["location"], "https://example.com");
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
        assert!(response.headers().get("content-type").is_none());
    }
}
