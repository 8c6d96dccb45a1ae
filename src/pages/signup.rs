//! Sign-up page: account form, CAPTCHA, and the verification-pending view.
//!
//! The page keeps `SignupState` in one signal and routes every input through
//! `state::signup::reduce`. The registration call is issued from
//! `spawn_local` only when `begin_submit` opened the gate for this click.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::password_strength_meter::PasswordStrengthMeter;
use crate::components::recaptcha::RecaptchaWidget;
use crate::config::ClientConfig;
#[cfg(feature = "hydrate")]
use crate::net::auth_service::AuthService;
use crate::net::auth_service::HttpAuthService;
use crate::state::signup::{SignupEvent, SignupField, SignupState, begin_submit, reduce};
#[cfg(feature = "hydrate")]
use crate::state::signup_controller::log_registration_failure;
use crate::util::password_strength::RuleBasedEvaluator;

/// Event for a CAPTCHA widget notification.
pub fn captcha_event(token: Option<String>) -> SignupEvent {
    match token {
        Some(token) => SignupEvent::CaptchaSolved(token),
        None => SignupEvent::CaptchaExpired,
    }
}

/// Border state of the confirmation input: neutral until something is typed.
pub fn confirm_input_class(state: &SignupState) -> &'static str {
    if state.form.confirm_password.is_empty() {
        "signup-input"
    } else if state.password_match {
        "signup-input signup-input--match"
    } else {
        "signup-input signup-input--mismatch"
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let service = expect_context::<HttpAuthService>();
    let navigate = use_navigate();
    let state = RwSignal::new(SignupState::default());
    let evaluator = RuleBasedEvaluator::default();

    let dispatch = move |event: SignupEvent| state.update(|s| *s = reduce(s, event, &evaluator));
    let edit = move |field: SignupField, value: String| dispatch(SignupEvent::FieldChanged { field, value });

    let submit = Callback::new({
        let service = service.clone();
        move |()| {
            let Some((submitting, request)) = state.with_untracked(|s| begin_submit(s, &evaluator)) else {
                return;
            };
            state.set(submitting);

            #[cfg(feature = "hydrate")]
            {
                let service = service.clone();
                leptos::task::spawn_local(async move {
                    let result = service.register(&request).await;
                    if let Err(e) = &result {
                        log_registration_failure(e);
                    }
                    dispatch(SignupEvent::RegistrationFinished(result));
                });
            }

            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (request, &service);
            }
        }
    });

    let resend = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let service = service.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = service.resend_verification_email().await {
                    leptos::logging::warn!("resend verification email failed: {e}");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &service;
        }
    });

    let go_login = Callback::new({
        let navigate = navigate.clone();
        let login_path = config.login_path.clone();
        move |()| navigate(&login_path, NavigateOptions::default())
    });
    let go_home = Callback::new(move |()| navigate("/", NavigateOptions::default()));

    let on_captcha = Callback::new(move |token: Option<String>| dispatch(captcha_event(token)));
    let strength = Signal::derive(move || state.with(|s| s.password_strength.clone()));
    let site_key = config.recaptcha_site_key;

    view! {
        <div class="signup-page">
            <Show
                when=move || state.with(SignupState::shows_form)
                fallback=move || view! { <VerificationSent on_resend=resend/> }
            >
                <div class="signup-card">
                    <h2 class="signup-card__title">"Create Account"</h2>
                    <form
                        class="signup-form"
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            submit.run(());
                        }
                    >
                        <label class="signup-label">
                            "Username"
                            <input
                                class="signup-input"
                                type="text"
                                name=SignupField::Username.name()
                                placeholder="Choose a username"
                                required
                                prop:value=move || state.with(|s| s.form.username.clone())
                                on:input=move |ev| edit(SignupField::Username, event_target_value(&ev))
                            />
                        </label>
                        <label class="signup-label">
                            "Email"
                            <input
                                class="signup-input"
                                type="email"
                                name=SignupField::Email.name()
                                placeholder="Enter your email"
                                required
                                prop:value=move || state.with(|s| s.form.email.clone())
                                on:input=move |ev| edit(SignupField::Email, event_target_value(&ev))
                            />
                        </label>
                        <label class="signup-label">
                            "Password"
                            <input
                                class="signup-input"
                                type="password"
                                name=SignupField::Password.name()
                                placeholder="Create a password"
                                required
                                prop:value=move || state.with(|s| s.form.password.clone())
                                on:input=move |ev| edit(SignupField::Password, event_target_value(&ev))
                            />
                        </label>
                        <label class="signup-label">
                            "Confirm Password"
                            <input
                                class=move || state.with(confirm_input_class)
                                type="password"
                                name=SignupField::ConfirmPassword.name()
                                placeholder="Confirm your password"
                                required
                                prop:value=move || state.with(|s| s.form.confirm_password.clone())
                                on:input=move |ev| edit(SignupField::ConfirmPassword, event_target_value(&ev))
                            />
                        </label>
                        <Show when=move || state.with(SignupState::shows_mismatch_hint)>
                            <p class="signup-hint signup-hint--error">"Passwords do not match"</p>
                        </Show>
                        <Show when=move || state.with(SignupState::shows_strength_meter)>
                            <PasswordStrengthMeter strength=strength/>
                        </Show>
                        <div class="signup-label">
                            "ReCAPTCHA"
                            <RecaptchaWidget site_key=site_key.clone() on_token=on_captcha/>
                        </div>
                        <Show when=move || state.with(|s| s.error.is_some())>
                            <div class="signup-error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</div>
                        </Show>
                        <button
                            class="signup-button"
                            type="submit"
                            disabled=move || !state.with(SignupState::can_submit)
                        >
                            {move || state.with(SignupState::submit_label)}
                        </button>
                    </form>
                    <p class="signup-card__footer">
                        "Already have an account? "
                        <button class="signup-link" on:click=move |_| go_login.run(())>
                            "Sign In"
                        </button>
                    </p>
                    <button class="signup-link signup-link--muted" on:click=move |_| go_home.run(())>
                        "Back to Home"
                    </button>
                </div>
            </Show>
        </div>
    }
}

/// Terminal view shown once the backend reports a verification email.
#[component]
fn VerificationSent(on_resend: Callback<()>) -> impl IntoView {
    view! {
        <div class="signup-card signup-card--sent">
            <h2 class="signup-card__title">"Verification Email Sent!"</h2>
            <p>"Please check your email to verify your account."</p>
            <button class="signup-link" on:click=move |_| on_resend.run(())>
                "Resend verification email"
            </button>
        </div>
    }
}
