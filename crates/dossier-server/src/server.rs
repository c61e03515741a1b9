use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    http::HeaderValue,
    routing::{get, patch, post},
};
use dossier_auth::{Auth0Verifier, AuthState, NoOpVerifier, ScopePolicy, TokenVerifier};
use dossier_upstream::{EpdClient, IdentityClient, MailClient};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use url::Url;

use crate::{config::AppConfig, handlers, routes, state::AppState};

pub struct GatewayServer {
    addr: SocketAddr,
    app: Router,
}

pub fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    // One connection pool shared by every upstream client.
    let http = reqwest::Client::new();

    let epd_url = cfg
        .upstream
        .epd_url
        .clone()
        .context("upstream.epd_url is required")?;
    let mail_url = cfg
        .upstream
        .mail_url
        .clone()
        .context("upstream.mail_url is required")?;

    // The verifier is chosen once here; request handling never branches
    // on provider configuration.
    let verifier: Arc<dyn TokenVerifier> = match (&cfg.auth0.domain, &cfg.auth0.audience) {
        (Some(domain), Some(audience)) if !cfg.auth0.disabled => {
            Arc::new(Auth0Verifier::from_domain(http.clone(), domain, audience)?)
        }
        _ => {
            tracing::warn!("identity provider not configured, tokens are accepted unverified");
            Arc::new(NoOpVerifier)
        }
    };
    if cfg.auth0.bypass_scopes {
        tracing::warn!("scope checks are bypassed");
    }

    let identity = match (
        &cfg.auth0.domain,
        &cfg.auth0.audience,
        &cfg.auth0.client_id,
        &cfg.auth0.client_secret,
    ) {
        (Some(domain), Some(audience), Some(client_id), Some(client_secret))
            if !cfg.auth0.disabled =>
        {
            let base = Url::parse(&format!("https://{domain}"))
                .with_context(|| format!("auth0.domain is not a valid host: {domain}"))?;
            Some(IdentityClient::new(
                http.clone(),
                base,
                client_id,
                client_secret,
                audience,
            ))
        }
        _ => None,
    };

    let state = AppState {
        auth: AuthState {
            verifier,
            policy: Arc::new(ScopePolicy::new(cfg.auth0.bypass_scopes)),
        },
        epd: EpdClient::new(http.clone(), epd_url),
        mail: MailClient::new(http, mail_url),
        identity,
    };

    let cors = match &cfg.client.origin {
        Some(origin) => {
            let allowed = origin
                .parse::<HeaderValue>()
                .map_err(|_| anyhow::anyhow!("client.origin is not a valid origin: {origin}"))?;
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(AllowMethods::mirror_request())
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true)
        }
        None => CorsLayer::permissive(),
    };

    let mut router = Router::new()
        .route("/", get(handlers::root))
        // Auth flows
        .route("/auth/login", post(routes::auth::login))
        .route("/auth/register", post(routes::auth::register))
        .route("/auth/profile", get(routes::auth::profile))
        // Patients
        .route(
            "/patient/",
            get(routes::patients::list).post(routes::patients::create),
        )
        .route(
            "/patient/{id}",
            get(routes::patients::detail)
                .put(routes::patients::update)
                .delete(routes::patients::remove),
        )
        // Encounters
        .route(
            "/encounter/",
            get(routes::encounters::list).post(routes::encounters::create),
        )
        .route(
            "/encounter/{id}",
            get(routes::encounters::detail)
                .put(routes::encounters::update)
                .delete(routes::encounters::remove),
        )
        // Mail
        .route("/mails/", post(routes::mails::create))
        .route(
            "/mails/{id}",
            get(routes::mails::detail).delete(routes::mails::remove),
        )
        .route("/mails/{id}/read", patch(routes::mails::mark_read))
        .route("/mails/user/{user_id}", get(routes::mails::for_user))
        .route(
            "/mails/user/{user_id}/count",
            get(routes::mails::count_for_user),
        );

    if cfg.auth0.has_client_credentials() {
        router = router.route("/auth/token", post(routes::auth::token));
    }

    Ok(router
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http.request",
                        http.method = %req.method(),
                        http.target = %req.uri(),
                    )
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &tracing::Span| {
                        tracing::info!(
                            http.status = %res.status().as_u16(),
                            elapsed_ms = %latency.as_millis(),
                            "request handled"
                        );
                    },
                ),
        )
        .with_state(state))
}

pub struct ServerBuilder {
    addr: SocketAddr,
    config: AppConfig,
}

impl ServerBuilder {
    pub fn new() -> Self {
        let cfg = AppConfig::default();
        Self {
            addr: cfg.addr(),
            config: cfg,
        }
    }

    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    pub fn with_config(mut self, cfg: AppConfig) -> Self {
        self.addr = cfg.addr();
        self.config = cfg;
        self
    }

    pub fn build(self) -> anyhow::Result<GatewayServer> {
        let app = build_app(&self.config)?;

        Ok(GatewayServer {
            addr: self.addr,
            app,
        })
    }
}

impl GatewayServer {
    pub async fn run(self) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        tracing::info!("listening on {}", self.addr);
        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

async fn shutdown_signal() {
    // Wait for Ctrl+C
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
