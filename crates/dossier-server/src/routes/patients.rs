use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use dossier_auth::{BearerAuth, scopes};
use dossier_core::{Patient, PatientDetail, PatientPage, PatientStatus};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PatientListQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub patient_status: Option<PatientStatus>,
    pub search: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    BearerAuth(auth): BearerAuth,
    Query(query): Query<PatientListQuery>,
) -> Result<Json<PatientPage>, ApiError> {
    state
        .auth
        .policy
        .authorize(scopes::PATIENTS_GET, &auth.claims)?;
    let page = state
        .epd
        .patients(
            auth.token(),
            query.limit,
            query.offset,
            query.patient_status,
            query.search.as_deref(),
        )
        .await?;
    Ok(Json(page))
}

pub async fn detail(
    State(state): State<AppState>,
    BearerAuth(auth): BearerAuth,
    Path(id): Path<i64>,
) -> Result<Json<PatientDetail>, ApiError> {
    state
        .auth
        .policy
        .authorize(scopes::PATIENTS_GET, &auth.claims)?;
    Ok(Json(state.epd.patient(auth.token(), id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    BearerAuth(auth): BearerAuth,
    Json(patient): Json<Patient>,
) -> Result<(StatusCode, Json<PatientDetail>), ApiError> {
    state
        .auth
        .policy
        .authorize(scopes::PATIENTS_CREATE, &auth.claims)?;
    let created = state.epd.create_patient(auth.token(), &patient).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    BearerAuth(auth): BearerAuth,
    Path(id): Path<i64>,
    Json(patient): Json<Patient>,
) -> Result<Json<PatientDetail>, ApiError> {
    state
        .auth
        .policy
        .authorize(scopes::PATIENTS_UPDATE, &auth.claims)?;
    let updated = state.epd.update_patient(auth.token(), id, &patient).await?;
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
        .authorize(scopes::PATIENTS_REMOVE, &auth.claims)?;
    state.epd.delete_patient(auth.token(), id).await?;
    Ok(StatusCode::OK)
}
