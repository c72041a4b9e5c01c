//! REST client for the external gym API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each raced against
//! a `gloo-timers` timeout. Server-side (SSR): stubs returning
//! `ApiError::Request` since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures are classified by how far the request got: rejected by the
//! server (`Rejected`), sent but never answered (`NoResponse`), never sent
//! (`Request`), or answered with an unexpected body (`Decode`). Pages map
//! these to user-facing text; nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use std::time::Duration;

use super::types::{Credentials, ErrorBody, LoginResponse, RegisterResponse, Registration};
use crate::config::ApiConfig;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/users";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    #[error("server did not respond")]
    NoResponse,
    #[error("request could not be sent: {0}")]
    Request(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message supplied by the collaborator, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Authentication and account-creation calls.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `POST /login` with `{email, password}`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` describing where the request failed.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    /// `POST /users` with `{name, email, password}`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` describing where the request failed.
    async fn register(&self, registration: &Registration) -> Result<RegisterResponse, ApiError>;
}

/// Extract the `message` field from a collaborator error body.
/// Non-JSON bodies and blank messages yield `None`.
pub fn parse_error_body(raw: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(raw)
        .ok()
        .and_then(|body| body.message)
        .filter(|m| !m.trim().is_empty())
}

#[cfg(any(test, feature = "hydrate"))]
fn timeout_millis(timeout: Duration) -> u32 {
    u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX)
}

/// `gloo-net` backed implementation of [`AuthApi`].
#[derive(Debug, Clone, Default)]
pub struct HttpAuthApi {
    config: ApiConfig,
}

impl HttpAuthApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    #[cfg(feature = "hydrate")]
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        use futures::future::{Either, select};
        use gloo_timers::future::TimeoutFuture;

        let url = self.config.endpoint(path);
        let request = gloo_net::http::Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let send = Box::pin(request.send());
        let timeout = Box::pin(TimeoutFuture::new(timeout_millis(self.config.timeout)));
        let resp = match select(send, timeout).await {
            Either::Left((Ok(resp), _)) => resp,
            Either::Left((Err(gloo_net::Error::JsError(e)), _)) => {
                log::warn!("POST {path} failed without response: {e}");
                return Err(ApiError::NoResponse);
            }
            Either::Left((Err(e), _)) => return Err(ApiError::Request(e.to_string())),
            Either::Right(((), _)) => {
                log::warn!("POST {path} timed out after {:?}", self.config.timeout);
                return Err(ApiError::NoResponse);
            }
        };

        if !resp.ok() {
            let status = resp.status();
            let raw = resp.text().await.unwrap_or_default();
            return Err(ApiError::Rejected { status, message: parse_error_body(&raw) });
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.post_json(LOGIN_PATH, credentials).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(ApiError::Request("not available on server".to_owned()))
        }
    }

    async fn register(&self, registration: &Registration) -> Result<RegisterResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.post_json(REGISTER_PATH, registration).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = registration;
            Err(ApiError::Request("not available on server".to_owned()))
        }
    }
}
