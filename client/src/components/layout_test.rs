use mentorhub::{User, UserRole};
use time::macros::datetime;

use super::*;

fn signed_in() -> SessionState {
    let at = datetime!(2024-02-01 0:00 UTC);
    let user = User::new("1", "test", "test@example.com", "测试用户", UserRole::Student, at);
    SessionState::authenticated(user, "mock-jwt-token".to_owned())
}

#[test]
fn nav_covers_every_protected_route() {
    let paths: Vec<_> = NAV_ITEMS.iter().map(|(path, _)| *path).collect();
    assert_eq!(paths, ["/dashboard", "/mentors", "/students", "/tasks", "/meetings", "/statistics", "/settings"]);
}

#[test]
fn nav_starts_at_home() {
    assert_eq!(NAV_ITEMS[0].0, mentorhub::guard::HOME_PATH);
}

#[test]
fn user_caption_shows_name_and_role() {
    assert_eq!(user_caption(&signed_in()), "测试用户 · 学生");
}

#[test]
fn user_caption_is_empty_when_signed_out() {
    assert_eq!(user_caption(&SessionState::default()), "");
}
