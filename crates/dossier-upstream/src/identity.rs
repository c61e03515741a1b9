use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::UpstreamError;
use crate::forward::UpstreamClient;

const SERVICE: &str = "Auth0";

#[derive(Debug, Serialize)]
struct ClientCredentialsRequest<'a> {
    grant_type: &'static str,
    client_id: &'a str,
    client_secret: &'a str,
    audience: &'a str,
}

/// Token endpoint response for the client-credentials grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

/// Client for the identity provider's token endpoint.
///
/// Only constructed when a client id and secret are configured;
/// provider rejections pass through with their original status and
/// body.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    inner: UpstreamClient,
    client_id: String,
    client_secret: String,
    audience: String,
}

impl IdentityClient {
    pub fn new(
        http: reqwest::Client,
        base: Url,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        IdentityClient {
            inner: UpstreamClient::new(http, base, SERVICE),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            audience: audience.into(),
        }
    }

    /// Exchange the configured client credentials for an access token.
    pub async fn client_credentials(&self) -> Result<ProviderToken, UpstreamError> {
        self.inner
            .post("/oauth/token")
            .form(&ClientCredentialsRequest {
                grant_type: "client_credentials",
                client_id: &self.client_id,
                client_secret: &self.client_secret,
                audience: &self.audience,
            })
            .send_json()
            .await
    }
}
