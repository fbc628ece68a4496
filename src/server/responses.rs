//! Response bodies and error-to-response mapping.

use crate::error::ApiError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

/// `{"message": ...}` inside a validation error body.
#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub message: String,
}

/// 400 body for a rejected phone number, echoing the raw input.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrorResponse {
    pub phone_number: String,
    pub error: ErrorMessage,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingParameter | ApiError::InvalidInput => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
            ApiError::Validation {
                phone_number,
                source,
            } => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorResponse {
                    phone_number,
                    error: ErrorMessage {
                        message: source.to_string(),
                    },
                }),
            )
                .into_response(),
        }
    }
}

/// 500 body used when a request handler panics.
pub fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "internal server error" })),
    )
        .into_response()
}
