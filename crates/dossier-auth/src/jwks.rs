use std::collections::HashMap;

use jsonwebtoken::jwk::{Jwk, JwkSet};
use tokio::sync::RwLock;
use url::Url;

use crate::error::AuthError;

/// Cache of the identity provider's signing keys, indexed by key id.
///
/// Keys are fetched lazily and refreshed once when a token references a
/// kid that is not cached yet, which covers provider key rotation
/// without a background task.
#[derive(Debug)]
pub struct JwksCache {
    http: reqwest::Client,
    jwks_url: Url,
    keys: RwLock<HashMap<String, Jwk>>,
}

impl JwksCache {
    pub fn new(http: reqwest::Client, jwks_url: Url) -> Self {
        JwksCache {
            http,
            jwks_url,
            keys: RwLock::new(HashMap::new()),
        }
    }

    /// Look up the signing key for `kid`, refreshing the set once when
    /// it is not cached.
    pub async fn key_for(&self, kid: &str) -> Result<Jwk, AuthError> {
        if let Some(key) = self.keys.read().await.get(kid) {
            return Ok(key.clone());
        }
        self.refresh().await?;
        self.keys
            .read()
            .await
            .get(kid)
            .cloned()
            .ok_or_else(|| AuthError::unauthorized("Unknown signing key"))
    }

    async fn refresh(&self) -> Result<(), AuthError> {
        let response = self
            .http
            .get(self.jwks_url.clone())
            .send()
            .await
            .map_err(|error| {
                tracing::warn!(%error, "failed to reach JWKS endpoint");
                AuthError::ProviderUnreachable
            })?;
        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "JWKS endpoint returned an error");
            return Err(AuthError::ProviderUnreachable);
        }
        let set: JwkSet = response.json().await.map_err(|error| {
            tracing::warn!(%error, "failed to parse JWKS document");
            AuthError::ProviderUnreachable
        })?;

        let mut keys = self.keys.write().await;
        keys.clear();
        for key in set.keys {
            if let Some(kid) = key.common.key_id.clone() {
                keys.insert(kid, key);
            }
        }
        Ok(())
    }
}
