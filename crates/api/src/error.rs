//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::{ServiceError, ValidationErrors};
use order_store::StoreError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// One or more submitted fields failed validation.
    Validation(ValidationErrors),
    /// An order with this email was already submitted.
    DuplicateEmail(String),
    /// Internal server error. The detail is logged, never sent to the
    /// client.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({
                    "error": errors.to_string(),
                    "fields": errors.errors(),
                }),
            ),
            ApiError::DuplicateEmail(email) => (
                StatusCode::CONFLICT,
                serde_json::json!({
                    "error": format!("an order with email {email} has already been submitted"),
                }),
            ),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "error": "internal server error" }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(errors) => ApiError::Validation(errors),
            ServiceError::Store(StoreError::DuplicateEmail(email)) => {
                ApiError::DuplicateEmail(email)
            }
            ServiceError::Store(err) => ApiError::Internal(err.to_string()),
        }
    }
}
