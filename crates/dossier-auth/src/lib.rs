//! Bearer-token verification and scope policy for the dossier gateway.
//!
//! Provides:
//! - [`BearerAuth`], an extractor that enforces header presence and the
//!   Bearer scheme before delegating to the configured verifier
//! - [`TokenVerifier`], implemented by [`Auth0Verifier`] (RS256 against
//!   the tenant JWKS) and [`NoOpVerifier`] (deployments without a
//!   provider)
//! - [`ScopePolicy`], translating application scopes to the coarse
//!   scopes Auth0 machine clients are granted

pub mod auth0;
pub mod claims;
pub mod config;
pub mod error;
pub mod jwks;
pub mod middleware;
pub mod scopes;
pub mod verifier;

pub use auth0::Auth0Verifier;
pub use claims::TokenClaims;
pub use config::Auth0Config;
pub use error::AuthError;
pub use jwks::JwksCache;
pub use middleware::{AuthContext, AuthState, BearerAuth};
pub use scopes::ScopePolicy;
pub use verifier::{NoOpVerifier, TokenVerifier};
