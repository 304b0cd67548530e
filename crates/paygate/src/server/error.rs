use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use paygate_core::CoreError;

// ==============================================================================
// Error Type
// ==============================================================================

#[derive(Debug)]
pub(crate) enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

// Extractor rejections would otherwise answer with axum's plain-text body.
impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// Map a provider client failure onto the HTTP surface.
///
/// Only argument validation is the caller's fault. Everything else,
/// including an empty transaction search, is reported as 500.
pub(super) fn map_core_error(operation: &'static str, err: CoreError) -> AppError {
    match err {
        CoreError::Validation(msg) => AppError::BadRequest(msg),
        CoreError::NotFound(_) => {
            tracing::info!(operation, error = %err, "provider returned no match");
            AppError::Internal(err.to_string())
        }
        CoreError::Provider(_) | CoreError::Decode(_) | CoreError::Config(_) => {
            tracing::warn!(operation, error = %err, "provider call failed");
            AppError::Internal(err.to_string())
        }
    }
}
