//! Sign-up form state and its reducer.
//!
//! DESIGN
//! ======
//! Every transition goes through `reduce(state, event, evaluator)`, a pure
//! function. Derived validation (password match, password strength) is
//! recomputed inside the `FieldChanged` branch rather than by reactive
//! effects, which keeps the match policy explicit:
//!
//! - editing `password` compares the new password against the *stored*
//!   confirmation;
//! - editing `confirmPassword` compares the new confirmation against the
//!   *stored* password.
//!
//! Phases: `Editing -> Submitting -> VerificationSent | Editing (with error)`.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use crate::net::error::{AuthError, AuthErrorCode};
use crate::net::types::{RegistrationOutcome, RegistrationRequest};
use crate::util::password_strength::{PasswordEvaluator, PasswordStrength};

pub const MSG_EMAIL_IN_USE: &str = "Email already in use";
pub const MSG_WEAK_PASSWORD: &str = "Password should be at least 6 characters";
pub const MSG_INVALID_EMAIL: &str = "Invalid email address";
pub const MSG_SIGNUP_FAILED: &str = "Signup failed. Please try again.";

/// Editable form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignupField {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl SignupField {
    /// DOM `name` attribute for the field's input.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }
}

/// Raw field values, updated one keystroke at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormState {
    #[must_use]
    pub fn get(&self, field: SignupField) -> &str {
        match field {
            SignupField::Username => &self.username,
            SignupField::Email => &self.email,
            SignupField::Password => &self.password,
            SignupField::ConfirmPassword => &self.confirm_password,
        }
    }

    fn set(&mut self, field: SignupField, value: String) {
        match field {
            SignupField::Username => self.username = value,
            SignupField::Email => self.email = value,
            SignupField::Password => self.password = value,
            SignupField::ConfirmPassword => self.confirm_password = value,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    /// Terminal: the form is replaced by the verification-pending view.
    VerificationSent,
}

/// Full sign-up form state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupState {
    pub form: FormState,
    pub password_match: bool,
    pub password_strength: PasswordStrength,
    pub recaptcha_token: Option<String>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub phase: Phase,
}

impl Default for SignupState {
    fn default() -> Self {
        Self {
            form: FormState::default(),
            password_match: true,
            password_strength: PasswordStrength::default(),
            recaptcha_token: None,
            is_loading: false,
            error: None,
            phase: Phase::Editing,
        }
    }
}

impl SignupState {
    /// The submission gate. The submit control must be disabled whenever
    /// this is false.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.password_match
            && self.password_strength.is_strong
            && self.recaptcha_token.is_some()
            && !self.is_loading
    }

    #[must_use]
    pub fn shows_form(&self) -> bool {
        self.phase != Phase::VerificationSent
    }

    /// "Passwords do not match" is shown only once a confirmation was typed.
    #[must_use]
    pub fn shows_mismatch_hint(&self) -> bool {
        !self.form.confirm_password.is_empty() && !self.password_match
    }

    #[must_use]
    pub fn shows_strength_meter(&self) -> bool {
        !self.form.password.is_empty()
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.is_loading { "Creating Account..." } else { "Create Account" }
    }
}

/// Inputs to the sign-up state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignupEvent {
    FieldChanged { field: SignupField, value: String },
    CaptchaSolved(String),
    CaptchaExpired,
    Submit,
    RegistrationFinished(Result<RegistrationOutcome, AuthError>),
}

/// Apply one event and return the next state.
pub fn reduce<P>(state: &SignupState, event: SignupEvent, evaluator: &P) -> SignupState
where
    P: PasswordEvaluator + ?Sized,
{
    let mut next = state.clone();
    if state.phase == Phase::VerificationSent {
        return next;
    }

    match event {
        SignupEvent::FieldChanged { field, value } => {
            match field {
                SignupField::Password => {
                    next.password_strength = evaluator.evaluate(&value);
                    next.password_match = value == state.form.confirm_password;
                }
                SignupField::ConfirmPassword => {
                    next.password_match = value == state.form.password;
                }
                SignupField::Username | SignupField::Email => {}
            }
            next.form.set(field, value);
        }
        SignupEvent::CaptchaSolved(token) => {
            next.recaptcha_token = Some(token).filter(|t| !t.trim().is_empty());
        }
        SignupEvent::CaptchaExpired => {
            next.recaptcha_token = None;
        }
        SignupEvent::Submit => {
            if state.can_submit() {
                next.is_loading = true;
                next.error = None;
                next.phase = Phase::Submitting;
            }
        }
        SignupEvent::RegistrationFinished(result) => {
            if state.phase != Phase::Submitting {
                return next;
            }
            next.is_loading = false;
            next.phase = Phase::Editing;
            match result {
                Ok(outcome) if outcome.email_sent => next.phase = Phase::VerificationSent,
                Ok(_) => {}
                Err(e) => next.error = Some(signup_error_message(&e)),
            }
        }
    }
    next
}

/// Apply `Submit` and hand back the request it opened, if any.
///
/// Only an editing state with an open gate yields a request. A state that is
/// already submitting (or terminal) yields `None`, so a repeated submit can
/// never issue a second `register` call.
pub fn begin_submit<P>(state: &SignupState, evaluator: &P) -> Option<(SignupState, RegistrationRequest)>
where
    P: PasswordEvaluator + ?Sized,
{
    if state.phase != Phase::Editing || !state.can_submit() {
        return None;
    }
    let request = RegistrationRequest {
        email: state.form.email.clone(),
        password: state.form.password.clone(),
        username: state.form.username.clone(),
        recaptcha_token: state.recaptcha_token.clone()?,
    };
    Some((reduce(state, SignupEvent::Submit, evaluator), request))
}

/// Map a registration failure to the single message shown under the form.
///
/// First match wins: the connectivity sentinel passes through verbatim, then
/// known codes, then a generic fallback.
#[must_use]
pub fn signup_error_message(err: &AuthError) -> String {
    if err.is_connectivity() {
        return err.to_string();
    }
    let message = match err.code() {
        Some(AuthErrorCode::EmailAlreadyInUse) => MSG_EMAIL_IN_USE,
        Some(AuthErrorCode::WeakPassword) => MSG_WEAK_PASSWORD,
        Some(AuthErrorCode::InvalidEmail) => MSG_INVALID_EMAIL,
        Some(AuthErrorCode::Other(_)) | None => MSG_SIGNUP_FAILED,
    };
    message.to_owned()
}
