use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claim set extracted from a verified access token.
///
/// Auth0 access tokens carry scopes as a single whitespace-separated
/// string under the `scope` claim; the helpers here expose that string
/// as a set without copying it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenClaims {
    claims: Map<String, Value>,
}

impl TokenClaims {
    pub fn new(claims: Map<String, Value>) -> Self {
        TokenClaims { claims }
    }

    /// Claim set with no entries, as produced by the no-op verifier.
    pub fn empty() -> Self {
        TokenClaims::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.claims.get(name)
    }

    /// Raw `scope` claim, empty when absent or not a string.
    pub fn scope(&self) -> &str {
        self.claims
            .get("scope")
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    /// Individual granted scopes.
    pub fn granted_scopes(&self) -> impl Iterator<Item = &str> {
        self.scope().split_whitespace()
    }

    pub fn has_scope(&self, scope: &str) -> bool {
        self.granted_scopes().any(|granted| granted == scope)
    }
}
