//! Generic one-shot forwarding to an upstream service.
//!
//! Every outbound call follows the same steps: build the target URL,
//! attach the bearer header and body, issue exactly one request, map
//! transport failures to [`UpstreamError::Unreachable`], surface non-2xx
//! statuses with their body intact, and validate the response shape.
//! No retries and no timeouts beyond the transport defaults.

use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::UpstreamError;
use crate::header::bearer_header;

/// Forwarding mechanics for one upstream service.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: Client,
    base: Url,
    service: &'static str,
}

impl UpstreamClient {
    pub fn new(http: Client, base: Url, service: &'static str) -> Self {
        UpstreamClient {
            http,
            base,
            service,
        }
    }

    pub fn service(&self) -> &'static str {
        self.service
    }

    /// Join the base URL with a resource path, preserving any trailing
    /// slash in the path.
    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn request(&self, method: Method, path: &str) -> Forward {
        Forward {
            service: self.service,
            request: self.http.request(method, self.endpoint(path)),
        }
    }

    pub fn get(&self, path: &str) -> Forward {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> Forward {
        self.request(Method::POST, path)
    }

    pub fn put(&self, path: &str) -> Forward {
        self.request(Method::PUT, path)
    }

    pub fn patch(&self, path: &str) -> Forward {
        self.request(Method::PATCH, path)
    }

    pub fn delete(&self, path: &str) -> Forward {
        self.request(Method::DELETE, path)
    }
}

/// A single outbound call in the making.
#[must_use]
pub struct Forward {
    service: &'static str,
    request: RequestBuilder,
}

impl Forward {
    /// Propagate the caller's bearer token.
    pub fn bearer(mut self, token: &str) -> Self {
        self.request = self
            .request
            .header(reqwest::header::AUTHORIZATION, bearer_header(token));
        self
    }

    /// Add a query parameter, omitting it entirely when the value is
    /// absent.
    pub fn query_opt(mut self, key: &str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            self.request = self.request.query(&[(key, value.to_string())]);
        }
        self
    }

    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        self.request = self.request.json(body);
        self
    }

    pub fn form<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        self.request = self.request.form(body);
        self
    }

    async fn dispatch(self) -> Result<reqwest::Response, UpstreamError> {
        let Forward { service, request } = self;
        let response = request.send().await.map_err(|error| {
            tracing::warn!(service, %error, "upstream unreachable");
            UpstreamError::unreachable(service)
        })?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Issue the call and parse the JSON response body into `T`.
    pub async fn send_json<T: DeserializeOwned>(self) -> Result<T, UpstreamError> {
        let service = self.service;
        let response = self.dispatch().await?;
        let bytes = response.bytes().await.map_err(|error| {
            tracing::warn!(service, %error, "reading upstream body failed");
            UpstreamError::unreachable(service)
        })?;
        serde_json::from_slice(&bytes).map_err(|error| {
            tracing::error!(service, %error, "upstream response shape mismatch");
            UpstreamError::contract(error.to_string())
        })
    }

    /// Issue the call and discard the response body.
    pub async fn send_ok(self) -> Result<(), UpstreamError> {
        self.dispatch().await?;
        Ok(())
    }
}
