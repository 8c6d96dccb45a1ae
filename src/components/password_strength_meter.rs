//! Five-bar password strength indicator with feedback hints.

#[cfg(test)]
#[path = "password_strength_meter_test.rs"]
mod password_strength_meter_test;

use leptos::prelude::*;

use crate::util::password_strength::{MAX_SCORE, PasswordStrength};

/// Bar classes for a score, filled from the left.
pub fn bar_classes(score: u8) -> Vec<&'static str> {
    (0..MAX_SCORE)
        .map(|i| {
            if i < score {
                "strength-meter__bar strength-meter__bar--filled"
            } else {
                "strength-meter__bar"
            }
        })
        .collect()
}

#[component]
pub fn PasswordStrengthMeter(strength: Signal<PasswordStrength>) -> impl IntoView {
    view! {
        <div class="strength-meter">
            <div class="strength-meter__bars">
                {move || {
                    bar_classes(strength.with(|s| s.score))
                        .into_iter()
                        .map(|class| view! { <div class=class></div> })
                        .collect_view()
                }}
            </div>
            {move || {
                strength
                    .with(|s| s.feedback.clone())
                    .into_iter()
                    .map(|hint| view! { <p class="strength-meter__hint">{hint}</p> })
                    .collect_view()
            }}
        </div>
    }
}
