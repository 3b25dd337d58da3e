//! REST API helpers for the remote user service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always with
//! `credentials: include` so the session cookie travels with the request.
//! Server-side (SSR): stubs returning [`LogoutError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as [`LogoutError`] values. Callers turn them into user
//! notifications; nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::config::ApiConfig;

/// Path of the logout endpoint relative to the API base URL.
pub const LOGOUT_PATH: &str = "users/logout";

/// Shown when a failure carries no usable server message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Ocurrió un error";

/// Failure of a logout request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LogoutError {
    /// The server answered with a non-2xx status.
    #[error("logout rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    /// The request never produced a response.
    #[error("logout request failed: {0}")]
    Transport(String),
    /// Called outside the browser.
    #[error("logout not available on server")]
    Unavailable,
}

impl LogoutError {
    /// Text for the error notification: the server's message when it sent
    /// one, otherwise [`GENERIC_FAILURE_MESSAGE`].
    pub fn user_message(&self) -> &str {
        match self {
            Self::Rejected { message: Some(message), .. } => message,
            _ => GENERIC_FAILURE_MESSAGE,
        }
    }
}

/// Shape of the outbound logout call: `POST`, empty body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogoutRequest {
    pub url: String,
    /// Attach cookies even when the API lives on another origin.
    pub include_credentials: bool,
}

/// Thin client over the configured API base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn logout_url(&self) -> String {
        self.config.endpoint(LOGOUT_PATH)
    }

    pub fn logout_request(&self) -> LogoutRequest {
        LogoutRequest { url: self.logout_url(), include_credentials: true }
    }

    /// End the server session with `POST {base}/users/logout`.
    ///
    /// Sends an empty body and the ambient session cookie.
    ///
    /// # Errors
    ///
    /// Returns [`LogoutError::Rejected`] on a non-2xx status (with the body's
    /// `message` when present) and [`LogoutError::Transport`] when no response
    /// arrives.
    pub async fn logout(&self) -> Result<(), LogoutError> {
        #[cfg(feature = "hydrate")]
        {
            let plan = self.logout_request();
            let mut builder = gloo_net::http::Request::post(&plan.url);
            if plan.include_credentials {
                builder = builder.credentials(web_sys::RequestCredentials::Include);
            }
            let resp = builder
                .send()
                .await
                .map_err(|e| LogoutError::Transport(e.to_string()))?;
            if resp.ok() {
                return Ok(());
            }
            let body = resp.text().await.unwrap_or_default();
            Err(LogoutError::Rejected {
                status: resp.status(),
                message: super::types::error_message(&body),
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(LogoutError::Unavailable)
        }
    }
}
