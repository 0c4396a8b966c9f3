#![cfg(not(feature = "csr"))]

use mentorhub::TOKEN_KEY;

use super::*;

#[test]
fn reads_are_empty_outside_browser() {
    assert_eq!(BrowserStore.get(TOKEN_KEY).unwrap(), None);
}

#[test]
fn writes_are_accepted_outside_browser() {
    assert!(BrowserStore.set(TOKEN_KEY, "mock-jwt-token").is_ok());
    assert!(BrowserStore.remove(TOKEN_KEY).is_ok());
    assert_eq!(BrowserStore.get(TOKEN_KEY).unwrap(), None);
}
