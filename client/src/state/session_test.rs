#![cfg(not(feature = "csr"))]

use std::time::Duration;

use futures::executor::block_on;
use mentorhub::{AuthError, Authenticator, Credentials, MemoryStore, Session};

use super::*;

fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Result<String, ()> {
    move |key| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_owned())
            .ok_or(())
    }
}

// =============================================================
// browser_config
// =============================================================

#[test]
fn browser_config_defaults_without_values() {
    assert_eq!(browser_config(lookup(&[])), SessionConfig::default());
}

#[test]
fn browser_config_reads_values() {
    let cfg = browser_config(lookup(&[("MENTORHUB_LOGIN_DELAY_MS", "10"), ("MENTORHUB_LOGIN_TIMEOUT_MS", "500")]));
    assert_eq!(cfg.login_delay, Duration::from_millis(10));
    assert_eq!(cfg.login_timeout, Some(Duration::from_millis(500)));
}

#[test]
fn browser_config_falls_back_on_garbage() {
    let cfg = browser_config(lookup(&[("MENTORHUB_LOGIN_DELAY_MS", "fast")]));
    assert_eq!(cfg, SessionConfig::default());
}

// =============================================================
// build_authenticator
// =============================================================

#[test]
fn mock_authenticator_by_default() {
    let auth = build_authenticator(&SessionConfig::default(), None);
    let payload = block_on(auth.authenticate(&Credentials::new("test@example.com", "123456"))).unwrap();
    assert_eq!(payload.token, "mock-jwt-token");
}

#[test]
fn blank_endpoint_still_uses_mock() {
    let auth = build_authenticator(&SessionConfig::default(), Some("   "));
    let err = block_on(auth.authenticate(&Credentials::new("wrong@example.com", "bad"))).unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[test]
fn endpoint_selects_http_authenticator() {
    let auth = build_authenticator(&SessionConfig::default(), Some("/api/auth/login"));
    let err = block_on(auth.authenticate(&Credentials::new("test@example.com", "123456"))).unwrap_err();
    assert!(matches!(err, AuthError::Unavailable(_)));
}

#[test]
fn client_session_login_flow_outside_browser() {
    let session = Session::init(build_authenticator(&SessionConfig::default(), None), MemoryStore::new());
    block_on(session.login("test@example.com", "123456")).unwrap();
    assert!(session.state().is_authenticated());
    session.logout();
    assert!(!session.state().is_authenticated());
}
