//! Failure taxonomy for authentication collaborator calls.
//!
//! ERROR HANDLING
//! ==============
//! Every failure the sign-up flow can observe from the backend lands in
//! `AuthError`. None of them are fatal: the form maps each one to a single
//! inline message and stays editable.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt;

/// Message reported when the backend cannot be reached at all.
///
/// The sign-up form shows it verbatim, ahead of any code-based mapping.
pub const CONNECTIVITY_MESSAGE: &str = "Unable to connect to server. Please try again later.";

/// Error codes the registration endpoint is known to report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthErrorCode {
    EmailAlreadyInUse,
    WeakPassword,
    InvalidEmail,
    Other(String),
}

impl AuthErrorCode {
    /// Parse a backend code. The `auth/` namespace prefix is optional.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let code = trimmed.strip_prefix("auth/").unwrap_or(trimmed);
        match code {
            "email-already-in-use" => Self::EmailAlreadyInUse,
            "weak-password" => Self::WeakPassword,
            "invalid-email" => Self::InvalidEmail,
            _ => Self::Other(trimmed.to_owned()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::EmailAlreadyInUse => "email-already-in-use",
            Self::WeakPassword => "weak-password",
            Self::InvalidEmail => "invalid-email",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for AuthErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Unable to connect to server. Please try again later.")]
    Connectivity,
    #[error("{message}")]
    Rejected { code: AuthErrorCode, message: String },
    #[error("unexpected response: {0}")]
    Protocol(String),
    #[error("not available on server")]
    Unavailable,
}

impl AuthError {
    /// Backend-reported code, if the failure carried one.
    #[must_use]
    pub fn code(&self) -> Option<&AuthErrorCode> {
        match self {
            Self::Rejected { code, .. } => Some(code),
            _ => None,
        }
    }

    /// True when the user-visible message is the connectivity sentinel.
    #[must_use]
    pub fn is_connectivity(&self) -> bool {
        self.to_string() == CONNECTIVITY_MESSAGE
    }
}
