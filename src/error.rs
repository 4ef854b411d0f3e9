//! Application error type and its HTTP mapping.
//!
//! # Response Shapes
//!
//! | Variant        | Status | Body                         |
//! |----------------|--------|------------------------------|
//! | `Validation`   | 400    | `{"error": "...", "details": {...}}` |
//! | `NotFound`     | 404    | `{"message": "..."}`         |
//! | `Internal`     | 500    | `{"error": "..."}`           |
//!
//! Request bodies rejected by the `Json` extractor also map to `Validation`.
//!
//! The 404 body uses `message` while every other error uses `error`. Existing
//! clients of the catalog API read both fields, so the shapes are kept apart.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Replaces the message of an internal error with a public one.
    ///
    /// The original cause is logged at `ERROR` level and never sent to the
    /// client. Other variants pass through unchanged.
    pub fn or_internal(self, public_message: &'static str) -> Self {
        match self {
            Self::Internal { message } => {
                tracing::error!(cause = %message, "{}", public_message);
                Self::internal(public_message)
            }
            other => other,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            AppError::Validation { message, details } => {
                json!({ "error": message, "details": details })
            }
            AppError::NotFound { message } => json!({ "message": message }),
            AppError::Internal { message } => json!({ "error": message }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::internal(format!("Database error: {e}"))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or(Value::Null);
        AppError::bad_request("Validation failed", details)
    }
}

/// Malformed, mistyped or non-JSON request bodies answer 400 like any other
/// invalid input, instead of axum's plain-text 415/422.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid request body",
            json!({ "field": "body", "reason": rejection.body_text() }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("x", json!({})).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::not_found("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::internal("x").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_or_internal_hides_cause() {
        let err = AppError::internal("Database error: connection refused")
            .or_internal("Failed to fetch courses");

        assert_eq!(err.to_string(), "Failed to fetch courses");
    }

    #[test]
    fn test_or_internal_keeps_not_found() {
        let err = AppError::not_found("Course not found").or_internal("Failed to fetch");

        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.to_string(), "Course not found");
    }

    #[test]
    fn test_sqlx_error_is_internal() {
        let err = AppError::from(sqlx::Error::PoolTimedOut);

        assert!(matches!(err, AppError::Internal { .. }));
    }
}
