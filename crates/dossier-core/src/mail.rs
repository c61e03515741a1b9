//! Mail service payloads.
//!
//! Unlike the EPD types these are strict: unknown fields are rejected on
//! both the inbound payload and the upstream response, matching the mail
//! service contract.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::email::EmailAddress;

/// Payload for sending a new mail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MailCreate {
    pub user_id: i64,
    pub from: EmailAddress,
    pub to: EmailAddress,
    pub subject: String,
    pub body: String,
}

impl MailCreate {
    /// Field-level checks beyond what deserialization enforces.
    pub fn validate(&self) -> Result<(), String> {
        if self.subject.is_empty() {
            return Err("subject must not be empty".to_string());
        }
        if self.body.is_empty() {
            return Err("body must not be empty".to_string());
        }
        Ok(())
    }
}

/// Stored mail as the mail service returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Mail {
    pub id: i64,
    pub user_id: i64,
    pub from: EmailAddress,
    pub to: EmailAddress,
    pub subject: String,
    pub body: String,
    pub is_read: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Unread and total counts for one user's mailbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MailCount {
    pub unread_count: u64,
    pub total_count: u64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_stored_mail() {
        let body = json!({
            "id": 101,
            "userId": 7,
            "from": "noreply@hospital.nl",
            "to": "anna@hospital.nl",
            "subject": "Lab results",
            "body": "Your results are in.",
            "isRead": false,
            "createdAt": "2024-04-05T08:30:00.000Z",
            "updatedAt": "2024-04-05T08:30:00.000Z"
        });
        let parsed: Mail = serde_json::from_value(body).unwrap();
        assert!(!parsed.is_read);
        assert_eq!(parsed.created_at.year(), 2024);
    }

    #[test]
    fn rejects_unknown_fields() {
        let create = json!({
            "userId": 7,
            "from": "a@b.nl",
            "to": "c@d.nl",
            "subject": "s",
            "body": "b",
            "priority": "HIGH"
        });
        assert!(serde_json::from_value::<MailCreate>(create).is_err());

        let stored = json!({
            "id": 1,
            "userId": 7,
            "from": "a@b.nl",
            "to": "c@d.nl",
            "subject": "s",
            "body": "b",
            "isRead": true,
            "createdAt": "2024-04-05T08:30:00Z",
            "updatedAt": "2024-04-05T08:30:00Z",
            "__v": 0
        });
        assert!(serde_json::from_value::<Mail>(stored).is_err());
    }

    #[test]
    fn rejects_malformed_sender_address() {
        let create = json!({
            "userId": 7,
            "from": "not-an-email",
            "to": "c@d.nl",
            "subject": "s",
            "body": "b"
        });
        assert!(serde_json::from_value::<MailCreate>(create).is_err());
    }

    #[test]
    fn validate_requires_non_empty_subject_and_body() {
        let mut create = MailCreate {
            user_id: 7,
            from: EmailAddress::new("a@b.nl").unwrap(),
            to: EmailAddress::new("c@d.nl").unwrap(),
            subject: "s".into(),
            body: "b".into(),
        };
        assert!(create.validate().is_ok());

        create.subject.clear();
        assert!(create.validate().is_err());
    }

    #[test]
    fn count_rejects_negative_values() {
        let body = json!({"unreadCount": -1, "totalCount": 4});
        assert!(serde_json::from_value::<MailCount>(body).is_err());

        let ok: MailCount =
            serde_json::from_value(json!({"unreadCount": 2, "totalCount": 9})).unwrap();
        assert_eq!(ok.unread_count, 2);
    }
}
