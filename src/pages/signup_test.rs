use super::*;
use crate::util::password_strength::PasswordEvaluator;

fn with_passwords(password: &str, confirm: &str) -> SignupState {
    let evaluator = RuleBasedEvaluator::default();
    let state = reduce(
        &SignupState::default(),
        SignupEvent::FieldChanged { field: SignupField::Password, value: password.to_owned() },
        &evaluator,
    );
    reduce(
        &state,
        SignupEvent::FieldChanged { field: SignupField::ConfirmPassword, value: confirm.to_owned() },
        &evaluator,
    )
}

#[test]
fn captcha_event_maps_token_and_expiry() {
    assert_eq!(captcha_event(Some("tok".to_owned())), SignupEvent::CaptchaSolved("tok".to_owned()));
    assert_eq!(captcha_event(None), SignupEvent::CaptchaExpired);
}

#[test]
fn confirm_input_neutral_when_empty() {
    assert_eq!(confirm_input_class(&with_passwords("abc", "")), "signup-input");
}

#[test]
fn confirm_input_marks_match_and_mismatch() {
    assert_eq!(confirm_input_class(&with_passwords("abc", "abc")), "signup-input signup-input--match");
    assert_eq!(confirm_input_class(&with_passwords("abc", "abd")), "signup-input signup-input--mismatch");
}

#[test]
fn default_evaluator_drives_page_strength() {
    let state = with_passwords("Sup3r$ecret", "Sup3r$ecret");
    assert_eq!(state.password_strength, RuleBasedEvaluator::default().evaluate("Sup3r$ecret"));
}
