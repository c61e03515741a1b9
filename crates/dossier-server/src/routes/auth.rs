use axum::Json;
use axum::extract::State;
use dossier_auth::BearerAuth;
use dossier_core::{Credentials, TokenResponse, User, UserCreate};
use dossier_upstream::{ProviderToken, UpstreamError};

use crate::error::ApiError;
use crate::state::AppState;

/// Exchange EPD credentials for a session token.
pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<TokenResponse>, ApiError> {
    Ok(Json(state.epd.login(&credentials).await?))
}

pub async fn register(
    State(state): State<AppState>,
    Json(user): Json<UserCreate>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.epd.register(&user).await?))
}

pub async fn profile(
    State(state): State<AppState>,
    BearerAuth(auth): BearerAuth,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.epd.profile(auth.token()).await?))
}

/// Client-credentials exchange with the identity provider. Mounted only
/// when a client id and secret are configured.
pub async fn token(State(state): State<AppState>) -> Result<Json<ProviderToken>, ApiError> {
    let Some(identity) = &state.identity else {
        return Err(UpstreamError::unreachable("Auth0").into());
    };
    Ok(Json(identity.client_credentials().await?))
}
