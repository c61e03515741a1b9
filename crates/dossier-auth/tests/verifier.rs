//! Auth0 verifier tests against a mocked JWKS endpoint with real RS256
//! keys.

use std::sync::LazyLock;
use std::time::{SystemTime, UNIX_EPOCH};

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use dossier_auth::{Auth0Verifier, AuthError, TokenVerifier};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use rand::rngs::OsRng;
use rsa::pkcs8::{EncodePrivateKey, LineEnding};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ISSUER: &str = "https://tenant.example/";
const AUDIENCE: &str = "https://dossier/api";

struct SigningKey {
    kid: &'static str,
    encoding: EncodingKey,
    jwk: serde_json::Value,
}

fn generate_key(kid: &'static str) -> SigningKey {
    let private = RsaPrivateKey::new(&mut OsRng, 2048).unwrap();
    let public = RsaPublicKey::from(&private);
    let pem = private.to_pkcs8_pem(LineEnding::LF).unwrap();
    let jwk = json!({
        "kty": "RSA",
        "use": "sig",
        "alg": "RS256",
        "kid": kid,
        "n": URL_SAFE_NO_PAD.encode(public.n().to_bytes_be()),
        "e": URL_SAFE_NO_PAD.encode(public.e().to_bytes_be()),
    });
    SigningKey {
        kid,
        encoding: EncodingKey::from_rsa_pem(pem.as_bytes()).unwrap(),
        jwk,
    }
}

static KEY_A: LazyLock<SigningKey> = LazyLock::new(|| generate_key("key-a"));
static KEY_B: LazyLock<SigningKey> = LazyLock::new(|| generate_key("key-b"));

fn mint(key: &SigningKey, audience: &str, scope: &str, lifetime_secs: i64) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64;
    let claims = json!({
        "iss": ISSUER,
        "aud": audience,
        "sub": "auth0|test",
        "scope": scope,
        "iat": now,
        "exp": now + lifetime_secs,
    });
    let mut header = Header::new(Algorithm::RS256);
    header.kid = Some(key.kid.to_string());
    encode(&header, &claims, &key.encoding).unwrap()
}

async fn mount_jwks(server: &MockServer, keys: &[&SigningKey]) {
    let set = json!({
        "keys": keys.iter().map(|key| key.jwk.clone()).collect::<Vec<_>>()
    });
    Mock::given(method("GET"))
        .and(path("/.well-known/jwks.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(set))
        .mount(server)
        .await;
}

fn verifier_for(server_uri: &str) -> Auth0Verifier {
    let jwks_url = Url::parse(&format!("{server_uri}/.well-known/jwks.json")).unwrap();
    Auth0Verifier::new(reqwest::Client::new(), jwks_url, ISSUER, AUDIENCE)
}

#[tokio::test]
async fn accepts_valid_token_and_exposes_scopes() {
    let server = MockServer::start().await;
    mount_jwks(&server, &[&KEY_A]).await;
    let verifier = verifier_for(&server.uri());

    let token = mint(&KEY_A, AUDIENCE, "read:users create:users", 3600);
    let claims = verifier.verify(&token).await.unwrap();

    assert!(claims.has_scope("read:users"));
    assert!(!claims.has_scope("delete:users"));
    assert_eq!(claims.get("sub").and_then(|v| v.as_str()), Some("auth0|test"));
}

#[tokio::test]
async fn rejects_wrong_audience() {
    let server = MockServer::start().await;
    mount_jwks(&server, &[&KEY_A]).await;
    let verifier = verifier_for(&server.uri());

    let token = mint(&KEY_A, "https://other/api", "read:users", 3600);
    let rejected = verifier.verify(&token).await;
    assert!(matches!(rejected, Err(AuthError::Unauthorized { .. })));
}

#[tokio::test]
async fn rejects_expired_token() {
    let server = MockServer::start().await;
    mount_jwks(&server, &[&KEY_A]).await;
    let verifier = verifier_for(&server.uri());

    let token = mint(&KEY_A, AUDIENCE, "read:users", -3600);
    let rejected = verifier.verify(&token).await;
    assert!(matches!(rejected, Err(AuthError::Unauthorized { .. })));
}

#[tokio::test]
async fn rejects_garbage_token_without_contacting_provider() {
    let server = MockServer::start().await;
    let verifier = verifier_for(&server.uri());

    let rejected = verifier.verify("not-a-jwt").await;
    assert!(matches!(rejected, Err(AuthError::Unauthorized { .. })));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn refreshes_key_set_when_kid_is_unknown() {
    let server = MockServer::start().await;
    mount_jwks(&server, &[&KEY_A]).await;
    let verifier = verifier_for(&server.uri());

    let token_a = mint(&KEY_A, AUDIENCE, "read:users", 3600);
    verifier.verify(&token_a).await.unwrap();

    // Rotate: the provider now also serves key-b.
    server.reset().await;
    mount_jwks(&server, &[&KEY_A, &KEY_B]).await;

    let token_b = mint(&KEY_B, AUDIENCE, "read:users", 3600);
    let claims = verifier.verify(&token_b).await.unwrap();
    assert!(claims.has_scope("read:users"));
}

#[tokio::test]
async fn rejects_token_signed_by_unknown_key() {
    let server = MockServer::start().await;
    mount_jwks(&server, &[&KEY_A]).await;
    let verifier = verifier_for(&server.uri());

    let token = mint(&KEY_B, AUDIENCE, "read:users", 3600);
    let rejected = verifier.verify(&token).await;
    assert!(matches!(rejected, Err(AuthError::Unauthorized { .. })));
}

#[tokio::test]
async fn unreachable_jwks_endpoint_is_a_provider_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let verifier = verifier_for(&format!("http://{addr}"));
    let token = mint(&KEY_A, AUDIENCE, "read:users", 3600);
    let rejected = verifier.verify(&token).await;
    assert!(matches!(rejected, Err(AuthError::ProviderUnreachable)));
}

#[tokio::test]
async fn failing_jwks_endpoint_is_a_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/.well-known/jwks.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let verifier = verifier_for(&server.uri());

    let token = mint(&KEY_A, AUDIENCE, "read:users", 3600);
    let rejected = verifier.verify(&token).await;
    assert!(matches!(rejected, Err(AuthError::ProviderUnreachable)));
}
