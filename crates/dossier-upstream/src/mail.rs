use dossier_core::{Mail, MailCount, MailCreate};
use url::Url;

use crate::error::UpstreamError;
use crate::forward::UpstreamClient;

const SERVICE: &str = "Mail service";

/// Client for the mail service.
#[derive(Debug, Clone)]
pub struct MailClient {
    inner: UpstreamClient,
}

impl MailClient {
    pub fn new(http: reqwest::Client, base: Url) -> Self {
        MailClient {
            inner: UpstreamClient::new(http, base, SERVICE),
        }
    }

    /// All mail for one user, newest first as the upstream orders it.
    pub async fn mails_for_user(&self, token: &str, user_id: i64) -> Result<Vec<Mail>, UpstreamError> {
        self.inner
            .get(&format!("/api/mails/user/{user_id}"))
            .bearer(token)
            .send_json()
            .await
    }

    pub async fn count_for_user(&self, token: &str, user_id: i64) -> Result<MailCount, UpstreamError> {
        self.inner
            .get(&format!("/api/mails/user/{user_id}/count"))
            .bearer(token)
            .send_json()
            .await
    }

    pub async fn mail(&self, token: &str, id: i64) -> Result<Mail, UpstreamError> {
        self.inner
            .get(&format!("/api/mails/{id}"))
            .bearer(token)
            .send_json()
            .await
    }

    pub async fn create(&self, token: &str, mail: &MailCreate) -> Result<Mail, UpstreamError> {
        self.inner
            .post("/api/mails/")
            .bearer(token)
            .json(mail)
            .send_json()
            .await
    }

    pub async fn mark_read(&self, token: &str, id: i64) -> Result<Mail, UpstreamError> {
        self.inner
            .patch(&format!("/api/mails/{id}/read"))
            .bearer(token)
            .send_json()
            .await
    }

    /// Delete a mail. The upstream answers 204 with no body.
    pub async fn delete(&self, token: &str, id: i64) -> Result<(), UpstreamError> {
        self.inner
            .delete(&format!("/api/mails/{id}"))
            .bearer(token)
            .send_ok()
            .await
    }
}
