use axum::Json;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Errors produced while authenticating or authorizing a request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Missing, malformed or invalid credential.
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// Valid credential without the scope the route requires.
    #[error("forbidden: {message}")]
    Forbidden { message: String },

    /// The identity provider could not be reached.
    #[error("Auth0 niet bereikbaar")]
    ProviderUnreachable,
}

impl AuthError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        AuthError::Unauthorized {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        AuthError::Forbidden {
            message: message.into(),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::Unauthorized { message } => (
                StatusCode::UNAUTHORIZED,
                [(
                    header::WWW_AUTHENTICATE,
                    HeaderValue::from_static("Bearer"),
                )],
                Json(json!({ "detail": message })),
            )
                .into_response(),
            AuthError::Forbidden { message } => (
                StatusCode::FORBIDDEN,
                Json(json!({ "detail": message })),
            )
                .into_response(),
            AuthError::ProviderUnreachable => (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "detail": AuthError::ProviderUnreachable.to_string() })),
            )
                .into_response(),
        }
    }
}
