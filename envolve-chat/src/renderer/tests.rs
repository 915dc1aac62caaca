use super::*;
use crate::signing::{verify, SignedPayload};

const KEY: &str = "123-abcdefghijklmnopqrs";
const T: i64 = 1_290_000_000_000;

fn command_string(markup: &str) -> &str {
    markup
        .lines()
        .find_map(|line| line.strip_prefix("env_commandString='"))
        .and_then(|rest| rest.strip_suffix("';"))
        .expect("markup has no env_commandString line")
}

// =============================================================================
// render_widget_markup
// =============================================================================

#[test]
fn test_render_without_identity_is_logout() {
    let markup = render_widget_markup_at(KEY, None, T).unwrap();
    let payload: SignedPayload = command_string(&markup).parse().unwrap();
    assert_eq!(payload.command, "v=0.3,c=logout");
    assert_eq!(payload.timestamp_millis, T);
    assert!(markup.contains("var envoSn=123;"));
}

#[test]
fn test_render_with_empty_first_name_is_logout() {
    let identity = Identity::new("")
        .with_last_name("Doe")
        .with_admin(true);
    let markup = render_widget_markup_at(KEY, Some(&identity), T).unwrap();
    let payload: SignedPayload = command_string(&markup).parse().unwrap();
    assert_eq!(payload.command, "v=0.3,c=logout");

    let anonymous = render_widget_markup_at(KEY, Some(&Identity::anonymous()), T).unwrap();
    assert_eq!(anonymous, markup);
}

#[test]
fn test_render_admin_login() {
    let identity = Identity::new("Jane").with_admin(true);
    let markup = render_widget_markup_at(KEY, Some(&identity), T).unwrap();
    let payload: SignedPayload = command_string(&markup).parse().unwrap();
    assert_eq!(payload.command, "v=0.3,c=login,fn=SmFuZQ==,admin=t");
    assert!(!payload.command.contains("ln="));
    assert!(!payload.command.contains("pic="));
    assert!(!payload.command.contains("prof="));
}

#[test]
fn test_render_rejects_invalid_key() {
    for raw in ["", "123", "123-", "-abc", "1-2-3"] {
        assert_eq!(
            render_widget_markup_at(raw, Some(&Identity::new("Jane")), T),
            Err(EnvolveError::InvalidCredential)
        );
    }
}

#[test]
fn test_render_markup_verifies() {
    let api_key = ApiKey::parse(KEY).unwrap();
    let identity = Identity::new("Jane")
        .with_last_name("Doe")
        .with_pic("https://example.com/a.png")
        .with_profile_html("<p>Hello, world</p>");
    let markup = render_widget_markup(KEY, Some(&identity)).unwrap();
    let payload: SignedPayload = command_string(&markup).parse().unwrap();
    assert_eq!(verify(&api_key, &payload), Ok(()));
    assert_eq!(payload.timestamp_millis % 1000, 0);
}

// =============================================================================
// Low-level command builders
// =============================================================================

#[test]
fn test_login_command_requires_first_name() {
    let api_key = ApiKey::parse(KEY).unwrap();
    assert_eq!(
        login_command(&api_key, "", &Identity::new("Jane")),
        Err(EnvolveError::MissingFirstName)
    );
}

#[test]
fn test_login_command_at_is_signed_and_wrapped() {
    let api_key = ApiKey::parse(KEY).unwrap();
    let signed = login_command_at(&api_key, "Jane", &Identity::default(), T).unwrap();
    let expected = sign_at(&api_key, "v=0.3,c=login,fn=SmFuZQ==,admin=f", T);
    assert_eq!(signed, expected.to_string());
}

#[test]
fn test_signed_command_routing() {
    let api_key = ApiKey::parse(KEY).unwrap();
    assert_eq!(
        signed_command_at(&api_key, None, T).unwrap(),
        logout_command_at(&api_key, T)
    );
    let anonymous = Identity::new("").with_admin(true);
    assert_eq!(
        signed_command_at(&api_key, Some(&anonymous), T).unwrap(),
        logout_command_at(&api_key, T)
    );
    let jane = Identity::new("Jane").with_last_name("Doe");
    assert_eq!(
        signed_command_at(&api_key, Some(&jane), T).unwrap(),
        login_command_at(&api_key, "Jane", &jane, T).unwrap()
    );

    let payload: SignedPayload = signed_command(&api_key, Some(&jane)).unwrap().parse().unwrap();
    assert_eq!(verify(&api_key, &payload), Ok(()));
}

#[test]
fn test_logout_command() {
    let api_key = ApiKey::parse(KEY).unwrap();
    let signed = logout_command_at(&api_key, T);
    assert!(signed.ends_with(&format!(";{};v=0.3,c=logout", T)));

    let payload: SignedPayload = logout_command(&api_key).parse().unwrap();
    assert_eq!(payload.command, "v=0.3,c=logout");
    assert_eq!(verify(&api_key, &payload), Ok(()));
}
