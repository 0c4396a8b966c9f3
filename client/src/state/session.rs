//! Session context shared by the shell, login page, and dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the core `Session` container for Leptos. The container is built once
//! in `App` and every state change is mirrored into an `RwSignal` so views
//! and route guards re-render reactively.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::rc::Rc;

use leptos::prelude::*;
use mentorhub::{Session, SessionConfig, SessionState, WithTimeout};

use crate::net::api::{ClientAuthenticator, HttpAuthenticator};
use crate::util::storage::BrowserStore;
use crate::util::timer::BrowserSleep;

pub type ClientSession = Session<WithTimeout<ClientAuthenticator, BrowserSleep>, BrowserStore>;

/// Handle provided through context. `Copy`, so closures capture it freely.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: RwSignal<SessionState>,
    session: StoredValue<Rc<ClientSession>, LocalStorage>,
}

impl SessionContext {
    /// Build the container from browser storage and compile-time settings.
    pub fn init() -> Self {
        let config = browser_config(|key| baked_env(key).map(str::to_owned).ok_or(()));
        let session = Session::init(build_authenticator(&config, baked_env("MENTORHUB_AUTH_URL")), BrowserStore);
        let state = RwSignal::new(session.state());
        session.subscribe(move |next| state.set(next.clone()));
        Self { state, session: StoredValue::new_local(Rc::new(session)) }
    }

    /// Submit credentials. Completion is observed through `state`.
    pub fn login(&self, email: String, password: String) {
        #[cfg(feature = "csr")]
        {
            let session = self.session.get_value();
            leptos::task::spawn_local(async move {
                if let Err(e) = session.login(&email, &password).await {
                    leptos::logging::log!("login rejected: {e}");
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password);
        }
    }

    pub fn logout(&self) {
        self.session.with_value(|session| session.logout());
    }

    pub fn clear_error(&self) {
        self.session.with_value(|session| session.clear_error());
    }
}

/// Session settings for the browser, where there is no process environment.
///
/// Unparseable values fall back to defaults rather than breaking startup.
pub(crate) fn browser_config<F>(lookup: F) -> SessionConfig
where
    F: Fn(&str) -> Result<String, ()>,
{
    match SessionConfig::from_lookup(lookup) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "invalid session settings; using defaults");
            SessionConfig::default()
        }
    }
}

/// Mock service unless an auth endpoint was configured at build time.
pub(crate) fn build_authenticator(
    config: &SessionConfig,
    endpoint: Option<&str>,
) -> WithTimeout<ClientAuthenticator, BrowserSleep> {
    let inner = match endpoint.map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => ClientAuthenticator::Http(HttpAuthenticator::new(url)),
        None => ClientAuthenticator::Mock(mentorhub::MockAuthenticator::from_config(BrowserSleep, config)),
    };
    WithTimeout::new(inner, BrowserSleep, config.login_timeout)
}

fn baked_env(key: &str) -> Option<&'static str> {
    match key {
        "MENTORHUB_AUTH_URL" => option_env!("MENTORHUB_AUTH_URL"),
        "MENTORHUB_LOGIN_DELAY_MS" => option_env!("MENTORHUB_LOGIN_DELAY_MS"),
        "MENTORHUB_LOGIN_TIMEOUT_MS" => option_env!("MENTORHUB_LOGIN_TIMEOUT_MS"),
        _ => None,
    }
}
