use thiserror::Error;

use crate::api::event::ApiResponse;
use crate::api::response::json_response;
use serde_json::json;

/// Failure reported by a [`crate::domain::repositories::UrlRepository`].
///
/// `ConditionFailed` is the store's signal that an existence-gated write did
/// not apply; everything else is an infrastructure failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("conditional check failed")]
    ConditionFailed,
    #[error("store error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(err: impl std::fmt::Display) -> Self {
        Self::Backend(err.to_string())
    }
}

/// Caller-facing error of a single operation.
///
/// The message is returned verbatim as `{"error": message}`; underlying store
/// details are logged where the error is produced and never carried here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String },
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    Conflict { message: String },
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            AppError::Validation { .. } => 400,
            AppError::NotFound { .. } => 404,
            AppError::Conflict { .. } => 409,
            AppError::Internal { .. } => 500,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message }
            | AppError::NotFound { message }
            | AppError::Conflict { message }
            | AppError::Internal { message } => message,
        }
    }

    pub fn into_response(self) -> ApiResponse {
        json_response(self.status_code(), &json!({ "error": self.message() }))
    }
}
