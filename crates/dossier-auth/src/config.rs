use serde::{Deserialize, Serialize};
use url::Url;

/// Identity provider settings.
///
/// Domain and audience are both required for real verification; without
/// them the server starts with the no-op verifier. `disabled` turns the
/// provider off even when the other fields are present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Auth0Config {
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_secret: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub bypass_scopes: bool,
}

impl Auth0Config {
    /// Whether tokens should be verified against the provider.
    pub fn is_configured(&self) -> bool {
        self.domain.is_some() && self.audience.is_some() && !self.disabled
    }

    /// Whether the client-credentials exchange can be offered.
    pub fn has_client_credentials(&self) -> bool {
        self.is_configured() && self.client_id.is_some() && self.client_secret.is_some()
    }

    pub fn validate(&self) -> Result<(), String> {
        if let Some(domain) = &self.domain {
            if domain.is_empty() {
                return Err("auth0.domain must not be empty when set".to_string());
            }
            Url::parse(&format!("https://{domain}/.well-known/jwks.json"))
                .map_err(|_| format!("auth0.domain is not a valid host: {domain}"))?;
        }
        Ok(())
    }
}
