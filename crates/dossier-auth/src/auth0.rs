use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use url::Url;

use crate::claims::TokenClaims;
use crate::error::AuthError;
use crate::jwks::JwksCache;
use crate::verifier::TokenVerifier;

/// Verifies RS256 access tokens issued by an Auth0 tenant.
///
/// Signature keys come from the tenant's JWKS endpoint; issuer and
/// audience are pinned to the configured tenant and API.
pub struct Auth0Verifier {
    jwks: JwksCache,
    issuer: String,
    audience: String,
}

impl Auth0Verifier {
    pub fn new(
        http: reqwest::Client,
        jwks_url: Url,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        Auth0Verifier {
            jwks: JwksCache::new(http, jwks_url),
            issuer: issuer.into(),
            audience: audience.into(),
        }
    }

    /// Build a verifier from a tenant domain like `tenant.eu.auth0.com`.
    pub fn from_domain(
        http: reqwest::Client,
        domain: &str,
        audience: &str,
    ) -> Result<Self, url::ParseError> {
        let jwks_url = Url::parse(&format!("https://{domain}/.well-known/jwks.json"))?;
        let issuer = format!("https://{domain}/");
        Ok(Auth0Verifier::new(http, jwks_url, issuer, audience))
    }
}

#[async_trait]
impl TokenVerifier for Auth0Verifier {
    async fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let header = decode_header(token).map_err(|error| {
            tracing::debug!(%error, "token header rejected");
            AuthError::unauthorized("Invalid token")
        })?;
        let kid = header
            .kid
            .ok_or_else(|| AuthError::unauthorized("Token header missing kid"))?;

        let jwk = self.jwks.key_for(&kid).await?;
        let key = DecodingKey::from_jwk(&jwk).map_err(|error| {
            tracing::debug!(%error, "signing key rejected");
            AuthError::unauthorized("Invalid token")
        })?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        let data = decode::<TokenClaims>(token, &key, &validation).map_err(|error| {
            tracing::debug!(%error, "token rejected");
            AuthError::unauthorized("Invalid token")
        })?;
        Ok(data.claims)
    }
}
