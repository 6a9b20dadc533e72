use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::services::enrollment::FieldError;

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

#[derive(Debug)]
pub(crate) enum ApiError {
    BadRequest(String),
    /// A field-level rejection; the response names the offending field.
    Validation(FieldError),
    NotFound(String),
}

impl From<FieldError> for ApiError {
    fn from(err: FieldError) -> Self {
        Self::Validation(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse { error: message, field: None }),
            )
                .into_response(),
            ApiError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse { error: err.message, field: Some(err.field) }),
            )
                .into_response(),
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse { error: message, field: None }))
                    .into_response()
            }
        }
    }
}
