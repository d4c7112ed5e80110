use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use projectboard_core::cursor::CursorError;
use projectboard_core::project::ValidationError;
use projectboard_core::storage::RepositoryError;

/// API error type. Every variant maps to a JSON `{"error": ...}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid JSON")]
    InvalidJson,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Invalid cursor")]
    InvalidCursor(#[source] CursorError),
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

impl From<CursorError> for ApiError {
    fn from(err: CursorError) -> Self {
        Self::InvalidCursor(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::InvalidJson | Self::Validation(_) | Self::InvalidCursor(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            Self::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, self.to_string()),
            Self::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message_passes_through() {
        let err = ApiError::Validation(ValidationError::InvalidRepoUrl);
        assert_eq!(
            err.to_string(),
            "repo_url must look like https://github.com/<owner>/<repo>"
        );
    }

    #[test]
    fn test_cursor_error_maps_to_fixed_message() {
        let err = ApiError::from(CursorError::Base64);
        assert_eq!(err.to_string(), "Invalid cursor");
    }
}
