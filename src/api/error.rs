//! API error types and helpers.
//!
//! # Purpose and responsibility
//! Centralizes HTTP error response construction so every endpoint returns
//! the same `{"error": "..."}` body shape.
//!
//! # Key invariants and assumptions
//! - Internal errors log details server-side but return generic messages.
//! - The status code must align with the error category: 400 for malformed
//!   input, 404 for missing records, 500 for store failures.
use crate::api::types::ErrorResponse;
use crate::store::StoreError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Structured API error returned by handlers.
///
/// Couples an HTTP status code with the JSON error body so handlers can use
/// `?` and still produce the contract shape.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Build a 404 Not Found error.
pub fn api_not_found(message: &str) -> ApiError {
    ApiError {
        status: StatusCode::NOT_FOUND,
        body: ErrorResponse {
            error: message.to_string(),
        },
    }
}

/// Build a 400 Bad Request error for malformed client input.
pub fn api_bad_request(message: &str) -> ApiError {
    ApiError {
        status: StatusCode::BAD_REQUEST,
        body: ErrorResponse {
            error: message.to_string(),
        },
    }
}

/// Build a 500 Internal Server Error from a store error.
///
/// Logs the store error server-side and returns a generic message to the
/// client.
pub fn api_internal(message: &str, err: &StoreError) -> ApiError {
    tracing::error!(error = ?err, "cake storage error");
    ApiError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: ErrorResponse {
            error: message.to_string(),
        },
    }
}
