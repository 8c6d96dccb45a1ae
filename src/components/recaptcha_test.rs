use super::*;

#[test]
fn normalize_keeps_real_tokens() {
    assert_eq!(normalize_captcha_token(Some("03AGdBq2".to_owned())), Some("03AGdBq2".to_owned()));
}

#[test]
fn normalize_trims_whitespace() {
    assert_eq!(normalize_captcha_token(Some("  tok \n".to_owned())), Some("tok".to_owned()));
}

#[test]
fn normalize_drops_blank_and_missing() {
    assert_eq!(normalize_captcha_token(Some(String::new())), None);
    assert_eq!(normalize_captcha_token(Some("   ".to_owned())), None);
    assert_eq!(normalize_captcha_token(None), None);
}

#[test]
fn callback_names_are_distinct() {
    assert_ne!(SOLVED_CALLBACK, EXPIRED_CALLBACK);
}

#[test]
fn widget_disabled_without_site_key() {
    assert!(!widget_enabled(""));
    assert!(!widget_enabled("  "));
    assert!(widget_enabled("6LeIxAcTAAAAAJcZVRqyHh71UMIEGNQ_MXjiZKhI"));
}

#[test]
fn render_params_mirror_placeholder_attributes() {
    let params = render_params("site-key");
    assert_eq!(
        params,
        [
            ("sitekey", "site-key".to_owned()),
            ("callback", SOLVED_CALLBACK.to_owned()),
            ("expired-callback", EXPIRED_CALLBACK.to_owned()),
        ]
    );
}
