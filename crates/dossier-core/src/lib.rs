//! Shared domain types for the dossier gateway.
//!
//! Mirrors the wire formats of the EPD and mail services: camelCase
//! field names, SCREAMING_SNAKE_CASE enums and numeric identifiers.

pub mod clinical;
pub mod email;
pub mod encounter;
pub mod enums;
pub mod mail;
pub mod pagination;
pub mod patient;
pub mod user;

pub use clinical::{Allergy, Diagnosis, InsurancePolicy, Insurer, MedicalRecord};
pub use email::{EmailAddress, EmailParseError};
pub use encounter::{Encounter, EncounterDetail, EncounterListItem, EncounterPage};
pub use enums::{
    DiagnosisType, EncounterStatus, EncounterType, InsuranceStatus, MedicalRecordType,
    PatientStatus, Sex, UserRole,
};
pub use mail::{Mail, MailCount, MailCreate};
pub use pagination::Pagination;
pub use patient::{Patient, PatientDetail, PatientPage, PatientRead};
pub use user::{Credentials, TokenResponse, User, UserCreate, UserRead};
