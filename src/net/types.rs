//! Wire DTOs for the authentication endpoints.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON so serde round-trips need
//! no per-endpoint glue.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::error::{AuthError, AuthErrorCode};

/// Payload for `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub email: String,
    pub password: String,
    pub username: String,
    pub recaptcha_token: String,
}

/// Successful registration answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationOutcome {
    /// Whether the backend dispatched a verification email.
    #[serde(default)]
    pub email_sent: bool,
}

/// Error body returned with non-2xx auth responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Convert a decoded error body into an `AuthError`.
    ///
    /// A body without a code is still a rejection; its code becomes
    /// `Other("")` so the form falls through to the generic message.
    #[must_use]
    pub fn into_error(self, status: u16) -> AuthError {
        let code = AuthErrorCode::parse(self.code.as_deref().unwrap_or_default());
        let message = self
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("request failed: {status}"));
        AuthError::Rejected { code, message }
    }
}
