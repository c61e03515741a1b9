use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use dossier_auth::{BearerAuth, scopes};
use dossier_core::{Mail, MailCount, MailCreate};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn for_user(
    State(state): State<AppState>,
    BearerAuth(auth): BearerAuth,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<Mail>>, ApiError> {
    state
        .auth
        .policy
        .authorize(scopes::MAILS_GET, &auth.claims)?;
    Ok(Json(state.mail.mails_for_user(auth.token(), user_id).await?))
}

pub async fn count_for_user(
    State(state): State<AppState>,
    BearerAuth(auth): BearerAuth,
    Path(user_id): Path<i64>,
) -> Result<Json<MailCount>, ApiError> {
    state
        .auth
        .policy
        .authorize(scopes::MAILS_GET, &auth.claims)?;
    Ok(Json(state.mail.count_for_user(auth.token(), user_id).await?))
}

pub async fn detail(
    State(state): State<AppState>,
    BearerAuth(auth): BearerAuth,
    Path(id): Path<i64>,
) -> Result<Json<Mail>, ApiError> {
    state
        .auth
        .policy
        .authorize(scopes::MAILS_GET, &auth.claims)?;
    Ok(Json(state.mail.mail(auth.token(), id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    BearerAuth(auth): BearerAuth,
    Json(mail): Json<MailCreate>,
) -> Result<(StatusCode, Json<Mail>), ApiError> {
    state
        .auth
        .policy
        .authorize(scopes::MAILS_CREATE, &auth.claims)?;
    mail.validate().map_err(ApiError::unprocessable)?;
    let created = state.mail.create(auth.token(), &mail).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn mark_read(
    State(state): State<AppState>,
    BearerAuth(auth): BearerAuth,
    Path(id): Path<i64>,
) -> Result<Json<Mail>, ApiError> {
    state
        .auth
        .policy
        .authorize(scopes::MAILS_UPDATE, &auth.claims)?;
    Ok(Json(state.mail.mark_read(auth.token(), id).await?))
}

pub async fn remove(
    State(state): State<AppState>,
    BearerAuth(auth): BearerAuth,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .auth
        .policy
        .authorize(scopes::MAILS_REMOVE, &auth.claims)?;
    state.mail.delete(auth.token(), id).await?;
    Ok(StatusCode::OK)
}
