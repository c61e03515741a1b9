//! Scope policy for guarded routes.
//!
//! Auth0 machine-to-machine clients are granted coarse scopes such as
//! `read:users` that do not name application actions directly. The
//! static table below translates application scopes to the external
//! scopes accepted for them; the policy is evaluated in a fixed order
//! with the first match winning.

use std::collections::HashMap;

use crate::claims::TokenClaims;
use crate::error::AuthError;

pub const PATIENTS_GET: &str = "patients:get";
pub const PATIENTS_CREATE: &str = "patients:create";
pub const PATIENTS_UPDATE: &str = "patients:update";
pub const PATIENTS_REMOVE: &str = "patients:remove";
pub const ENCOUNTERS_GET: &str = "encounters:get";
pub const ENCOUNTERS_CREATE: &str = "encounters:create";
pub const ENCOUNTERS_UPDATE: &str = "encounters:update";
pub const ENCOUNTERS_REMOVE: &str = "encounters:remove";
pub const MAILS_GET: &str = "mails:get";
pub const MAILS_CREATE: &str = "mails:create";
pub const MAILS_UPDATE: &str = "mails:update";
pub const MAILS_REMOVE: &str = "mails:remove";

/// External scopes accepted for each application scope.
const SCOPE_EQUIVALENTS: &[(&str, &[&str])] = &[
    (PATIENTS_GET, &["read:users", "read:clients"]),
    (PATIENTS_CREATE, &["create:users", "update:clients"]),
    (PATIENTS_UPDATE, &["update:users", "update:clients"]),
    (PATIENTS_REMOVE, &["delete:users", "update:clients"]),
    (ENCOUNTERS_GET, &["read:users", "read:clients"]),
    (ENCOUNTERS_CREATE, &["create:users", "update:clients"]),
    (ENCOUNTERS_UPDATE, &["update:users", "update:clients"]),
    (ENCOUNTERS_REMOVE, &["delete:users", "update:clients"]),
    (MAILS_GET, &["read:users", "read:clients"]),
    (MAILS_CREATE, &["create:users", "update:clients"]),
    (MAILS_UPDATE, &["update:users", "update:clients"]),
    (MAILS_REMOVE, &["delete:users", "update:clients"]),
];

/// Scopes that mark a machine-to-machine client with broad rights.
const M2M_ALLOWED: &[&str] = &[
    "read:users",
    "update:users",
    "delete:users",
    "create:users",
    "read:clients",
    "update:clients",
];

/// Decides whether a claim set may perform a scope-guarded action.
///
/// Built once at startup; the bypass flag is only honored when it was
/// explicitly enabled through configuration.
#[derive(Debug)]
pub struct ScopePolicy {
    bypass: bool,
    equivalents: HashMap<&'static str, &'static [&'static str]>,
}

impl ScopePolicy {
    pub fn new(bypass: bool) -> Self {
        ScopePolicy {
            bypass,
            equivalents: SCOPE_EQUIVALENTS.iter().copied().collect(),
        }
    }

    /// Allow or deny `required` for `claims`.
    ///
    /// Order: bypass, exact match, mapped equivalence, machine-client
    /// fallback. Anything else is denied.
    pub fn authorize(&self, required: &str, claims: &TokenClaims) -> Result<(), AuthError> {
        if self.bypass {
            return Ok(());
        }
        if claims.has_scope(required) {
            return Ok(());
        }
        if let Some(accepted) = self.equivalents.get(required) {
            if claims
                .granted_scopes()
                .any(|granted| accepted.contains(&granted))
            {
                return Ok(());
            }
        }
        if self.granted_via_m2m_fallback(claims) {
            return Ok(());
        }
        tracing::debug!(required, granted = claims.scope(), "scope denied");
        Err(AuthError::forbidden(format!(
            "Missing required scope: {required}"
        )))
    }

    /// Any overlap with the fixed M2M set allows the action, even when
    /// the equivalence table does not name it.
    fn granted_via_m2m_fallback(&self, claims: &TokenClaims) -> bool {
        claims
            .granted_scopes()
            .any(|granted| M2M_ALLOWED.contains(&granted))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn claims_with_scope(scope: &str) -> TokenClaims {
        serde_json::from_value(json!({ "scope": scope })).unwrap()
    }

    #[test]
    fn exact_scope_allows() {
        let policy = ScopePolicy::new(false);
        let claims = claims_with_scope("patients:get");
        assert!(policy.authorize(PATIENTS_GET, &claims).is_ok());
    }

    #[test]
    fn mapped_equivalent_allows() {
        let policy = ScopePolicy::new(false);
        let claims = claims_with_scope("create:users");
        assert!(policy.authorize(PATIENTS_CREATE, &claims).is_ok());
        assert!(policy.authorize(ENCOUNTERS_CREATE, &claims).is_ok());
    }

    #[test]
    fn m2m_fallback_allows_unrelated_action() {
        let policy = ScopePolicy::new(false);
        let claims = claims_with_scope("create:users");
        // Not in the row for patients:remove, but in the M2M set.
        assert!(policy.authorize(PATIENTS_REMOVE, &claims).is_ok());
        assert!(policy.authorize("unmapped:action", &claims).is_ok());
    }

    #[test]
    fn denies_without_mapping_or_fallback_overlap() {
        let policy = ScopePolicy::new(false);
        let claims = claims_with_scope("openid profile");
        let denied = policy.authorize("unmapped:action", &claims);
        assert_eq!(
            denied,
            Err(AuthError::forbidden(
                "Missing required scope: unmapped:action"
            ))
        );
        assert!(policy.authorize(PATIENTS_GET, &claims).is_err());
    }

    #[test]
    fn empty_claims_deny() {
        let policy = ScopePolicy::new(false);
        assert!(policy.authorize(MAILS_GET, &TokenClaims::empty()).is_err());
    }

    #[test]
    fn bypass_allows_everything() {
        let policy = ScopePolicy::new(true);
        assert!(policy.authorize(PATIENTS_REMOVE, &TokenClaims::empty()).is_ok());
        assert!(policy.authorize("unmapped:action", &TokenClaims::empty()).is_ok());
    }

    #[test]
    fn every_table_row_accepts_its_mapped_scopes() {
        let policy = ScopePolicy::new(false);
        for (application_scope, accepted) in SCOPE_EQUIVALENTS {
            for external in accepted.iter() {
                let claims = claims_with_scope(external);
                assert!(
                    policy.authorize(application_scope, &claims).is_ok(),
                    "{external} should allow {application_scope}"
                );
            }
        }
    }
}
