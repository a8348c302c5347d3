//! Event router: resolves `(method, resource)` to an operation.
//!
//! # Route Table
//!
//! | Method    | Resource       | Operation                      |
//! |-----------|----------------|--------------------------------|
//! | `OPTIONS` | any            | CORS preflight                 |
//! | `POST`    | `/urls`        | [`create_url_handler`]         |
//! | `GET`     | `/urls`        | [`list_urls_handler`]          |
//! | `GET`     | `/urls/{slug}` | [`redirect_handler`]           |
//! | `PUT`     | `/urls/{slug}` | [`update_url_handler`]         |
//! | `DELETE`  | `/urls/{slug}` | [`delete_url_handler`]         |
//!
//! Anything else is `404 Route not found`. [`handle_event`] never fails: a
//! fault escaping an operation becomes `500 Internal server error`.

use crate::api::event::{ApiEvent, ApiResponse};
use crate::api::handlers::{
    create_url_handler, delete_url_handler, list_urls_handler, preflight_handler,
    redirect_handler, route_not_found_handler, update_url_handler,
};
use crate::api::response::internal_error_response;
use crate::application::services::UrlService;

pub const URLS_RESOURCE: &str = "/urls";
pub const URL_BY_SLUG_RESOURCE: &str = "/urls/{slug}";

/// HTTP methods the router distinguishes. Matching is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Options,
    Other,
}

impl Method {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "GET" => Self::Get,
            "POST" => Self::Post,
            "PUT" => Self::Put,
            "DELETE" => Self::Delete,
            "OPTIONS" => Self::Options,
            _ => Self::Other,
        }
    }
}

/// Route patterns the router knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Urls,
    UrlBySlug,
    Other,
}

impl Resource {
    pub fn parse(raw: &str) -> Self {
        match raw {
            URLS_RESOURCE => Self::Urls,
            URL_BY_SLUG_RESOURCE => Self::UrlBySlug,
            _ => Self::Other,
        }
    }
}

/// A resolved operation with the path input it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    Preflight,
    CreateUrl,
    ListUrls,
    GetUrl(&'a str),
    UpdateUrl(&'a str),
    DeleteUrl(&'a str),
    NotFound,
}

impl<'a> Route<'a> {
    /// Resolves an event to a route.
    ///
    /// A slug route without a `slug` path parameter does not match.
    pub fn resolve(event: &'a ApiEvent) -> Self {
        let method = Method::parse(&event.http_method);
        let resource = Resource::parse(&event.resource);

        match (method, resource, event.slug()) {
            (Method::Options, _, _) => Route::Preflight,
            (Method::Post, Resource::Urls, _) => Route::CreateUrl,
            (Method::Get, Resource::Urls, _) => Route::ListUrls,
            (Method::Get, Resource::UrlBySlug, Some(slug)) => Route::GetUrl(slug),
            (Method::Put, Resource::UrlBySlug, Some(slug)) => Route::UpdateUrl(slug),
            (Method::Delete, Resource::UrlBySlug, Some(slug)) => Route::DeleteUrl(slug),
            _ => Route::NotFound,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Route::Preflight => "preflight",
            Route::CreateUrl => "create_url",
            Route::ListUrls => "list_urls",
            Route::GetUrl(_) => "get_url",
            Route::UpdateUrl(_) => "update_url",
            Route::DeleteUrl(_) => "delete_url",
            Route::NotFound => "not_found",
        }
    }
}

/// Handles one event end-to-end and always produces a response.
pub async fn handle_event(service: &UrlService, event: ApiEvent) -> ApiResponse {
    tracing::debug!(?event, "Event");

    let route = Route::resolve(&event);
    tracing::info!(
        method = %event.http_method,
        resource = %event.resource,
        route = route.name(),
        "Dispatching"
    );

    match dispatch(service, route, event.body.as_deref()).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = ?e, "Unhandled error");
            internal_error_response()
        }
    }
}

async fn dispatch(
    service: &UrlService,
    route: Route<'_>,
    body: Option<&str>,
) -> anyhow::Result<ApiResponse> {
    let response = match route {
        Route::Preflight => preflight_handler(),
        Route::CreateUrl => create_url_handler(service, body).await?,
        Route::ListUrls => list_urls_handler(service).await,
        Route::GetUrl(slug) => redirect_handler(service, slug).await,
        Route::UpdateUrl(slug) => update_url_handler(service, slug, body).await?,
        Route::DeleteUrl(slug) => delete_url_handler(service, slug).await,
        Route::NotFound => route_not_found_handler(),
    };

    Ok(response)
}
