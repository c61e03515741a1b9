use dossier_core::{
    Credentials, Encounter, EncounterDetail, EncounterPage, EncounterStatus, EncounterType,
    Patient, PatientDetail, PatientPage, PatientStatus, TokenResponse, User, UserCreate,
};
use url::Url;

use crate::error::UpstreamError;
use crate::forward::UpstreamClient;

const SERVICE: &str = "EPD";

/// Client for the electronic patient dossier service.
#[derive(Debug, Clone)]
pub struct EpdClient {
    inner: UpstreamClient,
}

impl EpdClient {
    pub fn new(http: reqwest::Client, base: Url) -> Self {
        EpdClient {
            inner: UpstreamClient::new(http, base, SERVICE),
        }
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, UpstreamError> {
        self.inner
            .post("/api/auth/login")
            .json(credentials)
            .send_json()
            .await
            .map_err(|error| error.with_detail("Gebruikersnaam of wachtwoord is incorrect"))
    }

    pub async fn register(&self, user: &UserCreate) -> Result<User, UpstreamError> {
        self.inner
            .post("/api/auth/register")
            .json(user)
            .send_json()
            .await
            .map_err(|error| error.with_detail("Email al in gebruik"))
    }

    pub async fn profile(&self, token: &str) -> Result<User, UpstreamError> {
        self.inner
            .get("/api/auth/profile")
            .bearer(token)
            .send_json()
            .await
    }

    pub async fn patients(
        &self,
        token: &str,
        limit: Option<i64>,
        offset: Option<i64>,
        status: Option<PatientStatus>,
        search: Option<&str>,
    ) -> Result<PatientPage, UpstreamError> {
        self.inner
            .get("/api/patients/")
            .bearer(token)
            .query_opt("limit", limit)
            .query_opt("offset", offset)
            .query_opt("status", status)
            .query_opt("search", search)
            .send_json()
            .await
    }

    pub async fn patient(&self, token: &str, id: i64) -> Result<PatientDetail, UpstreamError> {
        self.inner
            .get(&format!("/api/patients/{id}"))
            .bearer(token)
            .send_json()
            .await
    }

    pub async fn create_patient(
        &self,
        token: &str,
        patient: &Patient,
    ) -> Result<PatientDetail, UpstreamError> {
        self.inner
            .post("/api/patients/")
            .bearer(token)
            .json(patient)
            .send_json()
            .await
    }

    pub async fn update_patient(
        &self,
        token: &str,
        id: i64,
        patient: &Patient,
    ) -> Result<PatientDetail, UpstreamError> {
        self.inner
            .put(&format!("/api/patients/{id}"))
            .bearer(token)
            .json(patient)
            .send_json()
            .await
    }

    pub async fn delete_patient(&self, token: &str, id: i64) -> Result<(), UpstreamError> {
        self.inner
            .delete(&format!("/api/patients/{id}"))
            .bearer(token)
            .send_ok()
            .await
    }

    pub async fn encounters(
        &self,
        token: &str,
        page: Option<i64>,
        limit: Option<i64>,
        encounter_id: Option<i64>,
        status: Option<EncounterStatus>,
        kind: Option<EncounterType>,
    ) -> Result<EncounterPage, UpstreamError> {
        self.inner
            .get("/api/encounters/")
            .bearer(token)
            .query_opt("page", page)
            .query_opt("limit", limit)
            .query_opt("encounterId", encounter_id)
            .query_opt("status", status)
            .query_opt("type", kind)
            .send_json()
            .await
    }

    pub async fn encounter(&self, token: &str, id: i64) -> Result<EncounterDetail, UpstreamError> {
        self.inner
            .get(&format!("/api/encounters/{id}"))
            .bearer(token)
            .send_json()
            .await
    }

    pub async fn create_encounter(
        &self,
        token: &str,
        encounter: &Encounter,
    ) -> Result<EncounterDetail, UpstreamError> {
        self.inner
            .post("/api/encounters/")
            .bearer(token)
            .json(encounter)
            .send_json()
            .await
    }

    pub async fn update_encounter(
        &self,
        token: &str,
        id: i64,
        encounter: &Encounter,
    ) -> Result<EncounterDetail, UpstreamError> {
        self.inner
            .put(&format!("/api/encounters/{id}"))
            .bearer(token)
            .json(encounter)
            .send_json()
            .await
    }

    pub async fn delete_encounter(&self, token: &str, id: i64) -> Result<(), UpstreamError> {
        self.inner
            .delete(&format!("/api/encounters/{id}"))
            .bearer(token)
            .send_ok()
            .await
    }
}
