//! API error types with HTTP response mapping.

use application::ApplicationError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// The request body could not be read as the expected JSON.
    BadRequest(String),
    /// A use case failed.
    Application(ApplicationError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Application(err) => application_error_to_response(err),
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn application_error_to_response(err: ApplicationError) -> (StatusCode, String) {
    match &err {
        ApplicationError::Argument(_) => (StatusCode::BAD_REQUEST, err.to_string()),
        ApplicationError::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
        ApplicationError::Duplicate { .. } | ApplicationError::Rule(_) => {
            (StatusCode::CONFLICT, err.to_string())
        }
        ApplicationError::Unknown(source) => {
            tracing::error!(error = %source, "internal server error");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        ApiError::Application(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
