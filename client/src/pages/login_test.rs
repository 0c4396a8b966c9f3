use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  test@example.com ", "123456"),
        Ok(("test@example.com".to_owned(), "123456".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "123456"), Err(MISSING_FIELDS_MESSAGE));
    assert_eq!(validate_login_input("test@example.com", ""), Err(MISSING_FIELDS_MESSAGE));
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(
        validate_login_input("a@b.com", " pw "),
        Ok(("a@b.com".to_owned(), " pw ".to_owned()))
    );
}

#[test]
fn submit_label_tracks_loading() {
    assert_eq!(submit_label(false), "登录");
    assert_eq!(submit_label(true), "登录中...");
}
