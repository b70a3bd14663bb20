//! REST API helpers for communicating with the marketplace backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): stubs returning an "unavailable" error,
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. Identity failures are
//! reported as `session::IdentityError`, which the session store turns into a
//! forced logout.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use session::{IdentityClient, IdentityError, UserProfile};

use super::types::VerifyOtpResponse;
#[cfg(feature = "csr")]
use super::types::{OtpRequest, OtpVerification};
use crate::config::ClientConfig;

/// Errors produced by the login endpoints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be deserialized.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// Called outside a browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Message suitable for showing to the user: the server's own error text
    /// when it sent one, otherwise `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message, .. } if !message.trim().is_empty() => message.trim().to_owned(),
            _ => fallback.to_owned(),
        }
    }
}

#[cfg(any(test, feature = "csr"))]
fn identity_endpoint(base: &str) -> String {
    format!("{base}/users/me")
}

#[cfg(any(test, feature = "csr"))]
fn otp_request_endpoint(base: &str) -> String {
    format!("{base}/auth/login")
}

#[cfg(any(test, feature = "csr"))]
fn otp_verify_endpoint(base: &str) -> String {
    format!("{base}/auth/verify-otp")
}

#[cfg(any(test, feature = "csr"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "csr")]
async fn status_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let message = resp.text().await.unwrap_or_default();
    ApiError::Status { status, message }
}

// =============================================================================
// IDENTITY
// =============================================================================

/// Identity endpoint client: `GET {api}/users/me` with the bearer token.
#[derive(Clone, Debug)]
pub struct HttpIdentityClient {
    base_url: String,
}

impl HttpIdentityClient {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self { base_url: config.api_base_url.clone() }
    }
}

#[async_trait::async_trait(?Send)]
impl IdentityClient for HttpIdentityClient {
    async fn fetch_identity(&self, token: &str) -> Result<UserProfile, IdentityError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&identity_endpoint(&self.base_url))
                .header("Authorization", &bearer_header(token))
                .send()
                .await
                .map_err(|e| IdentityError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(IdentityError::Rejected { status: resp.status() });
            }
            resp.json::<UserProfile>()
                .await
                .map_err(|e| IdentityError::Parse(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.base_url, token);
            Err(IdentityError::Transport("not available outside the browser".to_owned()))
        }
    }
}

// =============================================================================
// OTP LOGIN
// =============================================================================

/// Ask the server to email a one-time password via `POST {api}/auth/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the server responds with a non-OK status.
pub async fn request_login_otp(config: &ClientConfig, email: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&otp_request_endpoint(&config.api_base_url))
            .json(&OtpRequest { email })
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, email);
        Err(ApiError::Unavailable)
    }
}

/// Exchange an emailed one-time password for a bearer token via
/// `POST {api}/auth/verify-otp`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the server rejects the code,
/// or the response is malformed.
pub async fn verify_login_otp(config: &ClientConfig, email: &str, otp: &str) -> Result<VerifyOtpResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&otp_verify_endpoint(&config.api_base_url))
            .json(&OtpVerification { email, otp })
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp).await);
        }
        resp.json::<VerifyOtpResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, email, otp);
        Err(ApiError::Unavailable)
    }
}
