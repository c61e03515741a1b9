use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use dossier_auth::{BearerAuth, scopes};
use dossier_core::{Encounter, EncounterDetail, EncounterPage, EncounterStatus, EncounterType};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EncounterListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub encounter_id: Option<i64>,
    pub encounter_status: Option<EncounterStatus>,
    pub encounter_type: Option<EncounterType>,
}

pub async fn list(
    State(state): State<AppState>,
    BearerAuth(auth): BearerAuth,
    Query(query): Query<EncounterListQuery>,
) -> Result<Json<EncounterPage>, ApiError> {
    state
        .auth
        .policy
        .authorize(scopes::ENCOUNTERS_GET, &auth.claims)?;
    let page = state
        .epd
        .encounters(
            auth.token(),
            query.page,
            query.limit,
            query.encounter_id,
            query.encounter_status,
            query.encounter_type,
        )
        .await?;
    Ok(Json(page))
}

pub async fn detail(
    State(state): State<AppState>,
    BearerAuth(auth): BearerAuth,
    Path(id): Path<i64>,
) -> Result<Json<EncounterDetail>, ApiError> {
    state
        .auth
        .policy
        .authorize(scopes::ENCOUNTERS_GET, &auth.claims)?;
    Ok(Json(state.epd.encounter(auth.token(), id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    BearerAuth(auth): BearerAuth,
    Json(encounter): Json<Encounter>,
) -> Result<(StatusCode, Json<EncounterDetail>), ApiError> {
    state
        .auth
        .policy
        .authorize(scopes::ENCOUNTERS_CREATE, &auth.claims)?;
    let created = state.epd.create_encounter(auth.token(), &encounter).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    BearerAuth(auth): BearerAuth,
    Path(id): Path<i64>,
    Json(encounter): Json<Encounter>,
) -> Result<Json<EncounterDetail>, ApiError> {
    state
        .auth
        .policy
        .authorize(scopes::ENCOUNTERS_UPDATE, &auth.claims)?;
    let updated = state
        .epd
        .update_encounter(auth.token(), id, &encounter)
        .await?;
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<AppState>,
    BearerAuth(auth): BearerAuth,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .auth
        .policy
        .authorize(scopes::ENCOUNTERS_REMOVE, &auth.claims)?;
    state.epd.delete_encounter(auth.token(), id).await?;
    Ok(StatusCode::OK)
}
