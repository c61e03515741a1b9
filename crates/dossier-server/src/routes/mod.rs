pub mod auth;
pub mod encounters;
pub mod mails;
pub mod patients;
