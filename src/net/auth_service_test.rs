use super::*;

#[test]
fn register_endpoint_joins_base_url() {
    assert_eq!(register_endpoint("/api"), "/api/auth/register");
    assert_eq!(register_endpoint("https://auth.example.com/v1/"), "https://auth.example.com/v1/auth/register");
}

#[test]
fn resend_endpoint_joins_base_url() {
    assert_eq!(resend_endpoint("/api/"), "/api/auth/resend-verification");
}

#[test]
fn http_service_keeps_base_url() {
    let service = HttpAuthService::new("/api");
    assert_eq!(service.base_url(), "/api");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_service_is_unavailable_off_browser() {
    let service = HttpAuthService::new("/api");
    let req = RegistrationRequest {
        email: "a@b.com".to_owned(),
        password: "Secret1!".to_owned(),
        username: "alice".to_owned(),
        recaptcha_token: "tok".to_owned(),
    };
    assert_eq!(futures::executor::block_on(service.register(&req)), Err(AuthError::Unavailable));
    assert_eq!(futures::executor::block_on(service.resend_verification_email()), Err(AuthError::Unavailable));
}
