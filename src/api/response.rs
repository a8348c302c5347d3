//! Response builders shared by every route.

use std::collections::BTreeMap;

use serde::Serialize;

use super::event::ApiResponse;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

/// Builds a JSON response carrying the full CORS header set.
pub fn json_response<T: Serialize + ?Sized>(status_code: u16, body: &T) -> ApiResponse {
    let headers = BTreeMap::from([
        ("Content-Type".to_string(), "application/json".to_string()),
        (
            "Access-Control-Allow-Origin".to_string(),
            ALLOW_ORIGIN.to_string(),
        ),
        (
            "Access-Control-Allow-Methods".to_string(),
            ALLOW_METHODS.to_string(),
        ),
        (
            "Access-Control-Allow-Headers".to_string(),
            ALLOW_HEADERS.to_string(),
        ),
    ]);

    let body = serde_json::to_string(body).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to serialize response body");
        r#"{"error":"Internal server error"}"#.to_string()
    });

    ApiResponse {
        status_code,
        headers,
        body,
    }
}

/// Builds a `302 Found` redirect with an empty body.
///
/// Only `Location` and the CORS origin header are set.
pub fn redirect_response(location: &str) -> ApiResponse {
    ApiResponse {
        status_code: 302,
        headers: BTreeMap::from([
            ("Location".to_string(), location.to_string()),
            (
                "Access-Control-Allow-Origin".to_string(),
                ALLOW_ORIGIN.to_string(),
            ),
        ]),
        body: String::new(),
    }
}

/// The generic response for faults that escaped every operation.
pub fn internal_error_response() -> ApiResponse {
    json_response(500, &serde_json::json!({ "error": "Internal server error" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_response_headers() {
        let response = json_response(200, &json!({ "ok": true }));

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, r#"{"ok":true}"#);
        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(response.header("Access-Control-Allow-Origin"), Some("*"));
        assert_eq!(
            response.header("Access-Control-Allow-Methods"),
            Some("GET, POST, PUT, DELETE, OPTIONS")
        );
        assert_eq!(
            response.header("Access-Control-Allow-Headers"),
            Some("Content-Type")
        );
    }

    #[test]
    fn test_redirect_response_headers() {
        let response = redirect_response("https://example.com");

        assert_eq!(response.status_code, 302);
        assert!(response.body.is_empty());
        assert_eq!(response.headers.len(), 2);
        assert_eq!(response.header("Location"), Some("https://example.com"));
        assert_eq!(response.header("Access-Control-Allow-Origin"), Some("*"));
        assert_eq!(response.header("Content-Type"), None);
    }

    #[test]
    fn test_internal_error_response() {
        let response = internal_error_response();

        assert_eq!(response.status_code, 500);
        assert_eq!(response.body, r#"{"error":"Internal server error"}"#);
    }
}
