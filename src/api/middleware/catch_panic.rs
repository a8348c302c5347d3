//! Converts panics in request handling into the generic 500 response.

use std::any::Any;

use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::CatchPanicLayer;

use crate::api::response::internal_error_response;

type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Creates a layer that answers a panicking request with
/// `500 {"error":"Internal server error"}` and the standard CORS headers.
pub fn layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handle_panic as PanicHandler)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!(panic = detail, "Unhandled panic");

    internal_error_response().into_response()
}
