//! Login landing page; target of route-guard redirects.
//!
//! Sign-in itself is served by the authentication backend. This page only
//! points new users at the sign-up flow.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="signup-page">
            <div class="signup-card">
                <h2 class="signup-card__title">"Sign In"</h2>
                <p>"You need to be signed in to view that page."</p>
                <p class="signup-card__footer">
                    "No account yet? "
                    <A href="/signup">"Create Account"</A>
                </p>
            </div>
        </div>
    }
}
