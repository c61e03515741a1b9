use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Errors from forwarding a request to an upstream service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpstreamError {
    /// Transport-level failure; the upstream never answered.
    #[error("{service} niet bereikbaar")]
    Unreachable { service: &'static str },

    /// The upstream answered with a non-2xx status. The body is
    /// forwarded to the caller verbatim.
    #[error("upstream returned status {status}")]
    Status { status: u16, body: String },

    /// The upstream answered 2xx with a body that does not match the
    /// agreed shape. A defect, not a user condition.
    #[error("upstream contract violation: {message}")]
    Contract { message: String },
}

impl UpstreamError {
    pub fn unreachable(service: &'static str) -> Self {
        UpstreamError::Unreachable { service }
    }

    pub fn contract(message: impl Into<String>) -> Self {
        UpstreamError::Contract {
            message: message.into(),
        }
    }

    /// Replace the body of a status error with `{"detail": <detail>}`.
    ///
    /// The login and register flows use this so authentication failures
    /// never leak upstream internals. Other variants pass through.
    pub fn with_detail(self, detail: &str) -> Self {
        match self {
            UpstreamError::Status { status, .. } => UpstreamError::Status {
                status,
                body: json!({ "detail": detail }).to_string(),
            },
            other => other,
        }
    }
}

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        match self {
            UpstreamError::Unreachable { .. } => {
                let detail = self.to_string();
                (StatusCode::BAD_GATEWAY, Json(json!({ "detail": detail }))).into_response()
            }
            UpstreamError::Status { status, body } => {
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                (
                    status,
                    [(header::CONTENT_TYPE, "application/json")],
                    body,
                )
                    .into_response()
            }
            UpstreamError::Contract { message } => {
                tracing::error!(message, "upstream contract violation");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": message })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_message_names_the_service() {
        assert_eq!(
            UpstreamError::unreachable("EPD").to_string(),
            "EPD niet bereikbaar"
        );
        assert_eq!(
            UpstreamError::unreachable("Mail service").to_string(),
            "Mail service niet bereikbaar"
        );
    }

    #[test]
    fn unreachable_maps_to_502() {
        let response = UpstreamError::unreachable("EPD").into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn status_error_keeps_the_upstream_code() {
        let error = UpstreamError::Status {
            status: 404,
            body: r#"{"detail":"not found"}"#.to_string(),
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn with_detail_only_rewrites_status_bodies() {
        let rewritten = UpstreamError::Status {
            status: 401,
            body: r#"{"error":"bad credentials","hint":"..."}"#.to_string(),
        }
        .with_detail("Gebruikersnaam of wachtwoord is incorrect");
        assert_eq!(
            rewritten,
            UpstreamError::Status {
                status: 401,
                body: r#"{"detail":"Gebruikersnaam of wachtwoord is incorrect"}"#.to_string(),
            }
        );

        let untouched = UpstreamError::unreachable("EPD").with_detail("ignored");
        assert_eq!(untouched, UpstreamError::unreachable("EPD"));
    }

    #[test]
    fn contract_error_maps_to_500() {
        let response = UpstreamError::contract("missing field `id`").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
