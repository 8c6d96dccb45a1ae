//! Authentication collaborator used by the sign-up flow.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): `AuthError::Unavailable`, since registration is only
//! meaningful from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures collapse to `AuthError::Connectivity`; non-2xx answers
//! are decoded into `AuthError::Rejected` with the backend's code so the form
//! can map them to a fixed message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_service_test.rs"]
mod auth_service_test;

#[cfg(feature = "hydrate")]
use super::types::ApiErrorBody;
use super::error::AuthError;
use super::types::{RegistrationOutcome, RegistrationRequest};

/// Backend contract the sign-up controller depends on. Enables mocking in
/// tests.
///
/// Futures are not required to be `Send`; the browser runs them on a single
/// thread via `spawn_local`.
#[async_trait::async_trait(?Send)]
pub trait AuthService {
    /// Create an account and trigger a verification email.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Connectivity`] when the backend is unreachable and
    /// [`AuthError::Rejected`] with the backend's code otherwise.
    async fn register(&self, request: &RegistrationRequest) -> Result<RegistrationOutcome, AuthError>;

    /// Re-send the verification email for the pending account. Best effort.
    async fn resend_verification_email(&self) -> Result<(), AuthError>;
}

#[cfg(any(test, feature = "hydrate"))]
fn register_endpoint(base_url: &str) -> String {
    format!("{}/auth/register", base_url.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn resend_endpoint(base_url: &str) -> String {
    format!("{}/auth/resend-verification", base_url.trim_end_matches('/'))
}

/// `AuthService` backed by the JSON REST API under `api_base_url`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthService {
    base_url: String,
}

impl HttpAuthService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait::async_trait(?Send)]
impl AuthService for HttpAuthService {
    async fn register(&self, request: &RegistrationRequest) -> Result<RegistrationOutcome, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&register_endpoint(&self.base_url))
                .json(request)
                .map_err(|e| AuthError::Protocol(e.to_string()))?
                .send()
                .await
                .map_err(|e| {
                    leptos::logging::warn!("register request failed: {e}");
                    AuthError::Connectivity
                })?;
            if !resp.ok() {
                let status = resp.status();
                let body = resp.json::<ApiErrorBody>().await.unwrap_or_default();
                return Err(body.into_error(status));
            }
            resp.json::<RegistrationOutcome>()
                .await
                .map_err(|e| AuthError::Protocol(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(AuthError::Unavailable)
        }
    }

    async fn resend_verification_email(&self) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&resend_endpoint(&self.base_url))
                .send()
                .await
                .map_err(|_| AuthError::Connectivity)?;
            if !resp.ok() {
                let status = resp.status();
                let body = resp.json::<ApiErrorBody>().await.unwrap_or_default();
                return Err(body.into_error(status));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(AuthError::Unavailable)
        }
    }
}
