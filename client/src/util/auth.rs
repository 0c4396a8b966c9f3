//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes and the login page apply the same redirect mechanics;
//! only the decision function differs.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use mentorhub::{SessionState, login_redirect, route_decision};

/// Redirect to `/login` whenever the session is neither signed in nor loading.
pub fn install_unauth_redirect<F>(state: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    install_redirect(state, navigate, |s| route_decision(s).redirect_path());
}

/// Send a signed-in visitor from the login page to the dashboard.
pub fn install_authed_redirect<F>(state: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    install_redirect(state, navigate, login_redirect);
}

fn install_redirect<F, D>(state: RwSignal<SessionState>, navigate: F, decide: D)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
    D: Fn(&SessionState) -> Option<&'static str> + 'static,
{
    Effect::new(move || {
        if let Some(path) = state.with(|s| decide(s)) {
            navigate(path, NavigateOptions::default());
        }
    });
}
