//! Presence-only route guard.
//!
//! Renders its children when a session credential is stored, otherwise
//! replaces the current history entry with the login route. See
//! `util::auth` for the decision itself and its limitations.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::util::auth::{GuardDecision, guard_decision, redirect_options};
use crate::util::storage::SharedCredentialStore;

/// Wrap a protected view.
///
/// The decision runs after mount, so the server render and the first
/// hydrated frame both show nothing of the protected subtree.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let store = expect_context::<SharedCredentialStore>();
    let navigate = use_navigate();
    let allowed = RwSignal::new(false);

    Effect::new(move || match guard_decision(store.as_ref(), &config.token_storage_key, &config.login_path) {
        GuardDecision::Render => allowed.set(true),
        GuardDecision::Redirect(path) => {
            leptos::logging::log!("no session credential, redirecting to {path}");
            navigate(&path, redirect_options());
        }
    });

    view! { <Show when=move || allowed.get()>{children()}</Show> }
}
