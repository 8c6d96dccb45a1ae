//! reCAPTCHA v2 checkbox bridge.
//!
//! The widget is owned by Google's script; this component only renders the
//! placeholder element and forwards the widget's callbacks into a Leptos
//! `Callback`. A solved challenge delivers `Some(token)`, an expired one
//! delivers `None`.

#[cfg(test)]
#[path = "recaptcha_test.rs"]
mod recaptcha_test;

use leptos::prelude::*;

pub const SCRIPT_SRC: &str = "https://www.google.com/recaptcha/api.js";
pub const SCRIPT_ID: &str = "recaptcha-script";
pub const SOLVED_CALLBACK: &str = "signupRecaptchaSolved";
pub const EXPIRED_CALLBACK: &str = "signupRecaptchaExpired";

/// Blank or missing tokens mean "no solved challenge".
pub fn normalize_captcha_token(raw: Option<String>) -> Option<String> {
    raw.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty())
}

/// Without a site key there is nothing to render, so the script is not loaded.
#[must_use]
pub fn widget_enabled(site_key: &str) -> bool {
    !site_key.trim().is_empty()
}

/// Parameters for an explicit `grecaptcha.render` call, mirroring the
/// placeholder's `data-*` attributes.
#[must_use]
pub fn render_params(site_key: &str) -> [(&'static str, String); 3] {
    [
        ("sitekey", site_key.to_owned()),
        ("callback", SOLVED_CALLBACK.to_owned()),
        ("expired-callback", EXPIRED_CALLBACK.to_owned()),
    ]
}

#[component]
pub fn RecaptchaWidget(site_key: String, on_token: Callback<Option<String>>) -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let site_key = site_key.clone();
        Effect::new(move || {
            if let Some(element) = node.get() {
                mount_widget(&element, &site_key, on_token);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = on_token;

    view! {
        <div
            node_ref=node
            class="g-recaptcha"
            data-sitekey=site_key
            data-callback=SOLVED_CALLBACK
            data-expired-callback=EXPIRED_CALLBACK
        ></div>
    }
}

/// Wire the widget into `element`.
///
/// First mount injects the script, which renders every `.g-recaptcha`
/// placeholder on load. Later mounts (client-side navigation back to the page)
/// find the script already loaded and render the fresh placeholder explicitly.
#[cfg(feature = "hydrate")]
fn mount_widget(element: &web_sys::Element, site_key: &str, on_token: Callback<Option<String>>) {
    use wasm_bindgen::{JsCast, JsValue};

    if !widget_enabled(site_key) {
        leptos::logging::warn!("no reCAPTCHA site key configured; widget disabled");
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    install_callbacks(&window, on_token);

    let grecaptcha = js_sys::Reflect::get(&window, &JsValue::from("grecaptcha")).unwrap_or(JsValue::UNDEFINED);
    let render = js_sys::Reflect::get(&grecaptcha, &JsValue::from("render"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
    let Some(render) = render else {
        inject_script(&window);
        return;
    };

    let params = js_sys::Object::new();
    for (key, value) in render_params(site_key) {
        let _ = js_sys::Reflect::set(&params, &JsValue::from(key), &JsValue::from(value));
    }
    let target: &JsValue = element;
    if let Err(e) = render.call2(&grecaptcha, target, &params) {
        leptos::logging::warn!("grecaptcha.render failed: {e:?}");
    }
}

/// Publish the widget callbacks on `window`.
#[cfg(feature = "hydrate")]
fn install_callbacks(window: &web_sys::Window, on_token: Callback<Option<String>>) {
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;

    let solved = Closure::<dyn Fn(JsValue)>::new(move |token: JsValue| {
        on_token.run(normalize_captcha_token(token.as_string()));
    });
    let expired = Closure::<dyn Fn()>::new(move || on_token.run(None));
    let _ = js_sys::Reflect::set(window, &JsValue::from(SOLVED_CALLBACK), solved.as_ref());
    let _ = js_sys::Reflect::set(window, &JsValue::from(EXPIRED_CALLBACK), expired.as_ref());
    // Replaced on the next mount; the widget may call them at any time until then.
    solved.forget();
    expired.forget();
}

/// Append the widget script to `<head>` unless a previous mount already did.
#[cfg(feature = "hydrate")]
fn inject_script(window: &web_sys::Window) {
    let Some(document) = window.document() else {
        return;
    };
    if document.get_element_by_id(SCRIPT_ID).is_some() {
        return;
    }
    let Ok(script) = document.create_element("script") else {
        return;
    };
    script.set_id(SCRIPT_ID);
    let _ = script.set_attribute("src", SCRIPT_SRC);
    let _ = script.set_attribute("async", "");
    let _ = script.set_attribute("defer", "");
    if let Some(head) = document.head() {
        let _ = head.append_child(&script);
    }
}
