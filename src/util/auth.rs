//! Route-guard decision logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical unauthenticated redirect behavior through
//! `RouteGuard`; the decision itself lives here so it can be tested without a
//! router or a browser.
//!
//! LIMITATION
//! ==========
//! This is a presence check only. A token that is expired, forged or revoked
//! still passes. Real authorization happens server-side; the guard only keeps
//! signed-out users away from screens that would fail anyway.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos_router::NavigateOptions;

use super::storage::CredentialStore;

/// Outcome of one guard evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the protected children unmodified.
    Render,
    /// Replace the current history entry with this path.
    Redirect(String),
}

/// True when a non-empty credential is stored under `key`.
pub fn has_credential(store: &dyn CredentialStore, key: &str) -> bool {
    store.get(key).is_some_and(|token| !token.trim().is_empty())
}

/// Decide whether a protected view may render.
pub fn guard_decision(store: &dyn CredentialStore, key: &str, login_path: &str) -> GuardDecision {
    if has_credential(store, key) {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(login_path.to_owned())
    }
}

/// Navigation options for guard redirects: replace, so Back does not return
/// to the protected placeholder.
#[must_use]
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}
