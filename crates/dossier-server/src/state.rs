use axum::extract::FromRef;
use dossier_auth::AuthState;
use dossier_upstream::{EpdClient, IdentityClient, MailClient};

/// State shared by every route: the auth gate plus one client per
/// upstream service.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub epd: EpdClient,
    pub mail: MailClient,
    /// Present only when client credentials are configured.
    pub identity: Option<IdentityClient>,
}

impl FromRef<AppState> for AuthState {
    fn from_ref(state: &AppState) -> AuthState {
        state.auth.clone()
    }
}
