use super::*;
use crate::util::storage::MemoryStore;

#[test]
fn missing_credential_redirects_to_login() {
    let store = MemoryStore::new();
    assert_eq!(guard_decision(&store, "token", "/login"), GuardDecision::Redirect("/login".to_owned()));
}

#[test]
fn empty_credential_redirects() {
    let store = MemoryStore::with_entry("token", "");
    assert_eq!(guard_decision(&store, "token", "/login"), GuardDecision::Redirect("/login".to_owned()));
}

#[test]
fn whitespace_credential_redirects() {
    let store = MemoryStore::with_entry("token", "   ");
    assert!(!has_credential(&store, "token"));
}

#[test]
fn present_credential_renders() {
    let store = MemoryStore::with_entry("token", "opaque-value");
    assert_eq!(guard_decision(&store, "token", "/login"), GuardDecision::Render);
}

#[test]
fn credential_under_other_key_does_not_count() {
    let store = MemoryStore::with_entry("session", "opaque-value");
    assert_eq!(guard_decision(&store, "token", "/signin"), GuardDecision::Redirect("/signin".to_owned()));
}

#[test]
fn redirect_options_replace_history() {
    let options = redirect_options();
    assert!(options.replace);
}
