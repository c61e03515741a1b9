use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::header;
use axum::http::request::Parts;

use crate::claims::TokenClaims;
use crate::error::AuthError;
use crate::scopes::ScopePolicy;
use crate::verifier::TokenVerifier;

/// Verified identity of the caller, available to route handlers.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub claims: TokenClaims,
    token: String,
}

impl AuthContext {
    /// The bearer credential as presented, for propagation upstream.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn has_scope(&self, scope: &str) -> bool {
        self.claims.has_scope(scope)
    }
}

/// Verifier and policy shared by all guarded routes.
#[derive(Clone)]
pub struct AuthState {
    pub verifier: Arc<dyn TokenVerifier>,
    pub policy: Arc<ScopePolicy>,
}

/// Extractor that authenticates the request before the handler runs.
///
/// Header presence and scheme are checked here in every mode; only the
/// credential itself is delegated to the configured verifier.
pub struct BearerAuth(pub AuthContext);

impl<S> FromRequestParts<S> for BearerAuth
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth = AuthState::from_ref(state);

        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| AuthError::unauthorized("Missing Authorization header"))?;
        let header = header
            .to_str()
            .map_err(|_| AuthError::unauthorized("Invalid Authorization header"))?;
        let (scheme, credential) = header
            .split_once(' ')
            .ok_or_else(|| AuthError::unauthorized("Invalid Authorization header"))?;
        if !scheme.eq_ignore_ascii_case("bearer") {
            return Err(AuthError::unauthorized(
                "Authorization scheme must be Bearer",
            ));
        }
        let credential = credential.trim();
        if credential.is_empty() {
            return Err(AuthError::unauthorized("Empty Bearer token"));
        }

        let claims = auth.verifier.verify(credential).await?;
        tracing::debug!(scope = claims.scope(), "bearer token accepted");
        Ok(BearerAuth(AuthContext {
            claims,
            token: credential.to_string(),
        }))
    }
}
