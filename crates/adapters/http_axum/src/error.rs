//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use atelier_domain::error::AtelierError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`AtelierError`] to an HTTP response with appropriate status code.
pub struct ApiError(AtelierError);

impl From<AtelierError> for ApiError {
    fn from(err: AtelierError) -> Self {
        Self(err)
    }
}

impl From<atelier_domain::error::ValidationError> for ApiError {
    fn from(err: atelier_domain::error::ValidationError) -> Self {
        Self(AtelierError::from(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AtelierError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AtelierError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            AtelierError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized".to_string()),
            AtelierError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            AtelierError::Media(err) => {
                tracing::error!(error = %err, "media error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            AtelierError::Mail(err) => {
                tracing::error!(error = %err, "mail relay error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "failed to relay message".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
