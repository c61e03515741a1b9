use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use dossier_auth::AuthError;
use dossier_upstream::UpstreamError;
use serde_json::json;

/// Route-level error: authentication, forwarding, or a payload the
/// gateway rejects before any upstream call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
    #[error("{0}")]
    Unprocessable(String),
}

impl ApiError {
    pub fn unprocessable(message: impl Into<String>) -> Self {
        ApiError::Unprocessable(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Auth(error) => error.into_response(),
            ApiError::Upstream(error) => error.into_response(),
            ApiError::Unprocessable(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": message })),
            )
                .into_response(),
        }
    }
}
