//! Login page: email + password against the session container.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns only the form fields. Loading and error state live in the
//! shared `SessionContext`, so the submit button and error banner follow the
//! session rather than a page-local flag.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionContext;
use crate::util::auth::install_authed_redirect;

pub(crate) const MISSING_FIELDS_MESSAGE: &str = "请输入邮箱和密码";

/// Trim the email and require both fields. The password is passed through
/// untouched since whitespace may be significant.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok((email.to_owned(), password.to_owned()))
}

pub(crate) fn submit_label(loading: bool) -> &'static str {
    if loading { "登录中..." } else { "登录" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let state = session.state;
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let hint = RwSignal::new(None::<&'static str>);

    install_authed_redirect(state, use_navigate());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.with(|s| s.is_loading()) {
            return;
        }
        match validate_login_input(&email.get(), &password.get()) {
            Ok((email_value, password_value)) => {
                hint.set(None);
                session.login(email_value, password_value);
            }
            Err(msg) => hint.set(Some(msg)),
        }
    };

    let error_text = move || state.with(|s| s.error().map(str::to_owned));

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"研究生导师管理系统"</h1>
                <p class="login-card__subtitle">"请登录您的账号"</p>
                <Show when=move || error_text().is_some()>
                    <div class="login-error" role="alert">
                        <span>{move || error_text().unwrap_or_default()}</span>
                        <button
                            class="login-error__dismiss"
                            type="button"
                            aria-label="关闭"
                            on:click=move |_| session.clear_error()
                        >
                            "×"
                        </button>
                    </div>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="邮箱地址"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="密码"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button
                        class="login-button"
                        type="submit"
                        disabled=move || state.with(|s| s.is_loading())
                    >
                        {move || submit_label(state.with(|s| s.is_loading()))}
                    </button>
                </form>
                <Show when=move || hint.get().is_some()>
                    <p class="login-message">{move || hint.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
