//! Owned driver for the sign-up reducer and its collaborators.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Leptos page keeps `SignupState` in a signal and calls `reduce`
//! directly; this controller packages the same sequencing (gate, single
//! registration call, result fold-back) for hosts without a reactive runtime
//! and for tests.

#[cfg(test)]
#[path = "signup_controller_test.rs"]
mod signup_controller_test;

use super::signup::{SignupEvent, SignupField, SignupState, begin_submit, reduce};
use crate::net::auth_service::AuthService;
use crate::net::error::AuthError;
use crate::util::password_strength::PasswordEvaluator;

/// Log a failed registration, tagged with the backend code when there is one.
pub fn log_registration_failure(err: &AuthError) {
    match err.code() {
        Some(code) => leptos::logging::warn!("registration rejected [{code}]: {err}"),
        None => leptos::logging::warn!("registration failed: {err}"),
    }
}

/// Sign-up state plus the collaborators that advance it.
pub struct SignupController<S, P> {
    service: S,
    evaluator: P,
    state: SignupState,
}

impl<S, P> SignupController<S, P>
where
    S: AuthService,
    P: PasswordEvaluator,
{
    /// Fresh controller in the `Editing` phase with an empty form.
    pub fn new(service: S, evaluator: P) -> Self {
        Self { service, evaluator, state: SignupState::default() }
    }

    /// Current form state.
    pub fn state(&self) -> &SignupState {
        &self.state
    }

    /// The injected authentication collaborator.
    pub fn service(&self) -> &S {
        &self.service
    }

    fn dispatch(&mut self, event: SignupEvent) {
        self.state = reduce(&self.state, event, &self.evaluator);
    }

    /// Apply one keystroke-level edit to `field`.
    pub fn edit(&mut self, field: SignupField, value: impl Into<String>) {
        self.dispatch(SignupEvent::FieldChanged { field, value: value.into() });
    }

    /// Record a solved CAPTCHA token. Blank tokens count as unsolved.
    pub fn captcha_solved(&mut self, token: impl Into<String>) {
        self.dispatch(SignupEvent::CaptchaSolved(token.into()));
    }

    /// Drop the CAPTCHA token after the widget reports expiry.
    pub fn captcha_expired(&mut self) {
        self.dispatch(SignupEvent::CaptchaExpired);
    }

    /// Run one submit attempt.
    ///
    /// Returns `false` without touching the collaborator when the gate is
    /// closed, including while an earlier submission is still loading.
    /// Otherwise issues exactly one `register` call and folds its result back
    /// into the state.
    pub async fn submit(&mut self) -> bool {
        let Some((submitting, request)) = begin_submit(&self.state, &self.evaluator) else {
            return false;
        };
        self.state = submitting;

        leptos::logging::log!("registering account for {}", request.email);
        let result = self.service.register(&request).await;
        if let Err(e) = &result {
            log_registration_failure(e);
        }
        self.dispatch(SignupEvent::RegistrationFinished(result));
        true
    }

    /// Fire-and-forget resend; failures are logged and otherwise ignored.
    pub async fn resend_verification(&self) {
        if let Err(e) = self.service.resend_verification_email().await {
            leptos::logging::warn!("resend verification email failed: {e}");
        }
    }
}
