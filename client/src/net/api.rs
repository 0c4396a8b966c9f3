//! Authentication transports for the browser client.
//!
//! Client-side (csr): real HTTP calls via `gloo-net` when an auth endpoint
//! was configured at build time, otherwise the in-process mock service.
//! Native builds get a stub that reports the transport as unavailable.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is mapped onto `AuthError` so the session container can
//! record a user-facing message without knowing which transport ran.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use mentorhub::{AuthError, AuthPayload, Authenticator, Credentials, MockAuthenticator};
#[cfg(feature = "csr")]
use serde::Serialize;

use crate::util::timer::BrowserSleep;

/// Map a non-success HTTP status onto an auth failure.
#[cfg(any(test, feature = "csr"))]
fn status_error(status: u16) -> Option<AuthError> {
    match status {
        200..=299 => None,
        401 | 403 => Some(AuthError::InvalidCredentials),
        other => Some(AuthError::Unavailable(format!("login request failed: {other}"))),
    }
}

#[cfg(feature = "csr")]
#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

/// Posts credentials as JSON to a remote endpoint and expects an
/// `AuthPayload` back.
#[derive(Clone, Debug)]
pub struct HttpAuthenticator {
    endpoint: String,
}

impl HttpAuthenticator {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Authenticator for HttpAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthPayload, AuthError> {
        #[cfg(feature = "csr")]
        {
            let body = LoginBody { email: &credentials.email, password: credentials.password() };
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(&body)
                .map_err(|e| AuthError::Unavailable(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Unavailable(e.to_string()))?;
            if let Some(err) = status_error(resp.status()) {
                return Err(err);
            }
            resp.json::<AuthPayload>()
                .await
                .map_err(|e| AuthError::Unavailable(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            Err(AuthError::Unavailable("not available outside the browser".to_owned()))
        }
    }
}

/// The transport the app was built with.
#[derive(Clone, Debug)]
pub enum ClientAuthenticator {
    Mock(MockAuthenticator<BrowserSleep>),
    Http(HttpAuthenticator),
}

impl Authenticator for ClientAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthPayload, AuthError> {
        match self {
            Self::Mock(inner) => inner.authenticate(credentials).await,
            Self::Http(inner) => inner.authenticate(credentials).await,
        }
    }
}
