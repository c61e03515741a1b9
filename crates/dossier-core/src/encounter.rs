use serde::{Deserialize, Serialize};

use crate::clinical::{Diagnosis, MedicalRecord};
use crate::enums::{EncounterStatus, EncounterType};
use crate::pagination::Pagination;
use crate::patient::{PatientDetail, PatientRead};
use crate::user::UserRead;

/// Encounter record as the EPD returns it, and the payload shape for
/// create and update calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Encounter {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "type")]
    pub kind: EncounterType,
    pub status: EncounterStatus,
    pub start: String,
    pub end: String,
    pub reason: String,
    pub patient_id: i64,
    pub location: String,
    pub created_by_id: i64,
}

/// Encounter as it appears in list responses, with patient and author
/// references instead of location details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterListItem {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "type")]
    pub kind: EncounterType,
    pub status: EncounterStatus,
    pub start: String,
    pub end: String,
    pub reason: String,
    pub patient_id: i64,
    pub patient: PatientRead,
    pub created_by: UserRead,
}

/// One page of encounters plus paging metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterPage {
    pub encounters: Vec<EncounterListItem>,
    pub pagination: Pagination,
}

/// Encounter with the full patient dossier and related records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterDetail {
    #[serde(flatten)]
    pub encounter: Encounter,
    pub patient: PatientDetail,
    pub created_by: UserRead,
    #[serde(default)]
    pub medical_records: Vec<MedicalRecord>,
    #[serde(default)]
    pub diagnoses: Vec<Diagnosis>,
    #[serde(default)]
    pub medication_orders: Vec<String>,
}
