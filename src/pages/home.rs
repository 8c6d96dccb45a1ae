//! Protected home page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::route_guard::RouteGuard;
use crate::config::ClientConfig;
use crate::util::storage::SharedCredentialStore;

/// Home route, reachable only with a stored session credential.
#[component]
pub fn ProtectedHomePage() -> impl IntoView {
    view! {
        <RouteGuard>
            <HomePage/>
        </RouteGuard>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let store = expect_context::<SharedCredentialStore>();
    let navigate = use_navigate();

    let on_sign_out = move |_| {
        store.remove(&config.token_storage_key);
        navigate(&config.login_path, NavigateOptions::default());
    };

    view! {
        <div class="signup-page">
            <div class="signup-card">
                <h2 class="signup-card__title">"Welcome back"</h2>
                <p>"You are signed in."</p>
                <button class="signup-link" on:click=on_sign_out>
                    "Sign Out"
                </button>
            </div>
        </div>
    }
}
