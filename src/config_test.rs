use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn empty_env_yields_defaults() {
    let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.login_path, "/login");
    assert_eq!(config.token_storage_key, "token");
}

#[test]
fn api_base_url_trailing_slash_trimmed() {
    let config = ClientConfig::from_lookup(lookup_from(&[("SIGNUP_API_BASE_URL", "https://auth.example.com/v1/")])).unwrap();
    assert_eq!(config.api_base_url, "https://auth.example.com/v1");
}

#[test]
fn overrides_are_applied() {
    let config = ClientConfig::from_lookup(lookup_from(&[
        ("SIGNUP_TOKEN_KEY", "session"),
        ("SIGNUP_LOGIN_PATH", "/signin"),
        ("SIGNUP_RECAPTCHA_SITE_KEY", "site-key"),
    ]))
    .unwrap();
    assert_eq!(config.token_storage_key, "session");
    assert_eq!(config.login_path, "/signin");
    assert_eq!(config.recaptcha_site_key, "site-key");
}

#[test]
fn empty_token_key_rejected() {
    let err = ClientConfig::from_lookup(lookup_from(&[("SIGNUP_TOKEN_KEY", "  ")])).unwrap_err();
    assert_eq!(err, ConfigError::Empty { var: "SIGNUP_TOKEN_KEY" });
}

#[test]
fn relative_login_path_rejected() {
    let err = ClientConfig::from_lookup(lookup_from(&[("SIGNUP_LOGIN_PATH", "login")])).unwrap_err();
    assert_eq!(err, ConfigError::NotAbsolutePath { var: "SIGNUP_LOGIN_PATH", value: "login".to_owned() });
    assert_eq!(err.to_string(), "SIGNUP_LOGIN_PATH must be an absolute path, got \"login\"");
}
