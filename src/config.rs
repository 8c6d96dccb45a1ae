//! Client configuration parsed from environment variables.
//!
//! On the server the values are read at runtime; in the browser they are
//! baked in at compile time through `option_env!`, since WASM has no process
//! environment. The server must run with the same values the WASM bundle was
//! built with, otherwise the server render (login path, CAPTCHA site key) and
//! the hydrated client disagree.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";
pub const DEFAULT_LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
    #[error("{var} must be an absolute path, got {value:?}")]
    NotAbsolutePath { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for auth endpoints, without trailing slash.
    pub api_base_url: String,
    /// `localStorage` key whose presence marks a signed-in user.
    pub token_storage_key: String,
    /// Where the route guard sends signed-out users.
    pub login_path: String,
    /// reCAPTCHA v2 site key; empty skips loading the widget script.
    pub recaptcha_site_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            recaptcha_site_key: String::new(),
        }
    }
}

impl ClientConfig {
    /// Build typed config from a variable lookup.
    ///
    /// Optional:
    /// - `SIGNUP_API_BASE_URL`: default `/api`
    /// - `SIGNUP_TOKEN_KEY`: default `token`
    /// - `SIGNUP_LOGIN_PATH`: default `/login`
    /// - `SIGNUP_RECAPTCHA_SITE_KEY`: default empty
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("SIGNUP_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();

        let token_storage_key = lookup("SIGNUP_TOKEN_KEY").unwrap_or_else(|| DEFAULT_TOKEN_STORAGE_KEY.to_owned());
        if token_storage_key.trim().is_empty() {
            return Err(ConfigError::Empty { var: "SIGNUP_TOKEN_KEY" });
        }

        let login_path = lookup("SIGNUP_LOGIN_PATH").unwrap_or_else(|| DEFAULT_LOGIN_PATH.to_owned());
        if !login_path.starts_with('/') {
            return Err(ConfigError::NotAbsolutePath { var: "SIGNUP_LOGIN_PATH", value: login_path });
        }

        let recaptcha_site_key = lookup("SIGNUP_RECAPTCHA_SITE_KEY").unwrap_or_default();

        Ok(Self { api_base_url, token_storage_key, login_path, recaptcha_site_key })
    }

    /// Load config for the current target, falling back to defaults on error.
    pub fn load() -> Self {
        match Self::from_lookup(env_lookup) {
            Ok(config) => config,
            Err(e) => {
                leptos::logging::warn!("invalid client config, using defaults: {e}");
                Self::default()
            }
        }
    }
}

#[cfg(not(feature = "hydrate"))]
fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(feature = "hydrate")]
fn env_lookup(key: &str) -> Option<String> {
    let value = match key {
        "SIGNUP_API_BASE_URL" => option_env!("SIGNUP_API_BASE_URL"),
        "SIGNUP_TOKEN_KEY" => option_env!("SIGNUP_TOKEN_KEY"),
        "SIGNUP_LOGIN_PATH" => option_env!("SIGNUP_LOGIN_PATH"),
        "SIGNUP_RECAPTCHA_SITE_KEY" => option_env!("SIGNUP_RECAPTCHA_SITE_KEY"),
        _ => None,
    };
    value.map(str::to_owned)
}
