//! Closed vocabularies shared across the gateway.
//!
//! Wire values are SCREAMING_SNAKE_CASE to match the records the EPD
//! produces; unknown values are rejected at deserialization time.

use serde::{Deserialize, Serialize};

/// Role of a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Nurse,
    Doctor,
    Assistant,
    Admin,
}

/// Administrative sex recorded for a patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sex {
    Male,
    Female,
    Mx,
    Other,
    Unknown,
}

/// Care status of a patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PatientStatus {
    Active,
    Discharged,
    Deceased,
}

impl PatientStatus {
    /// Wire representation, also used for query string filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            PatientStatus::Active => "ACTIVE",
            PatientStatus::Discharged => "DISCHARGED",
            PatientStatus::Deceased => "DECEASED",
        }
    }
}

impl std::fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of encounter between a patient and the hospital.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EncounterType {
    Inpatient,
    Outpatient,
    Emergency,
    Telehealth,
    Other,
}

impl EncounterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EncounterType::Inpatient => "INPATIENT",
            EncounterType::Outpatient => "OUTPATIENT",
            EncounterType::Emergency => "EMERGENCY",
            EncounterType::Telehealth => "TELEHEALTH",
            EncounterType::Other => "OTHER",
        }
    }
}

impl std::fmt::Display for EncounterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of an encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EncounterStatus {
    Planned,
    InProgress,
    Completed,
    Cancelled,
}

impl EncounterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EncounterStatus::Planned => "PLANNED",
            EncounterStatus::InProgress => "IN_PROGRESS",
            EncounterStatus::Completed => "COMPLETED",
            EncounterStatus::Cancelled => "CANCELLED",
        }
    }
}

impl std::fmt::Display for EncounterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of medical record attached to a patient or encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MedicalRecordType {
    Note,
    Consultation,
    ProcedureSummary,
    DischargeSummary,
    Report,
    ChatSummary,
}

/// Clinical weight of a diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiagnosisType {
    Primary,
    Secondary,
    Differential,
}

/// State of an insurance policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InsuranceStatus {
    Active,
    Ended,
    Pending,
}
