//! Authenticated application shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route renders inside `DashboardLayout`. The shell is the
//! route guard: it renders children only while the session is signed in and
//! sends everyone else to `/login`.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use mentorhub::{RouteDecision, SessionState, route_decision};

use crate::state::session::SessionContext;
use crate::util::auth::install_unauth_redirect;

/// Sidebar entries as `(path, label)`.
pub const NAV_ITEMS: [(&str, &str); 7] = [
    ("/dashboard", "仪表盘"),
    ("/mentors", "导师管理"),
    ("/students", "学生管理"),
    ("/tasks", "任务管理"),
    ("/meetings", "会议管理"),
    ("/statistics", "数据统计"),
    ("/settings", "设置"),
];

/// `"测试用户 · 学生"`, or empty when nobody is signed in.
pub(crate) fn user_caption(state: &SessionState) -> String {
    state
        .user()
        .map(|u| format!("{} · {}", u.name, u.role.label()))
        .unwrap_or_default()
}

#[component]
pub fn DashboardLayout(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let state = session.state;

    install_unauth_redirect(state, use_navigate());

    let render_shell = move || state.with(|s| route_decision(s) == RouteDecision::RenderShell);
    let caption = move || state.with(user_caption);

    view! {
        <Show
            when=render_shell
            fallback=|| view! { <div class="shell-loading">"加载中..."</div> }
        >
            <div class="shell">
                <aside class="shell-sidebar">
                    <div class="shell-sidebar__brand">"导师管理系统"</div>
                    <nav class="shell-nav">
                        {NAV_ITEMS
                            .into_iter()
                            .map(|(href, label)| {
                                view! {
                                    <A href=href attr:class="shell-nav__item">
                                        {label}
                                    </A>
                                }
                            })
                            .collect_view()}
                    </nav>
                </aside>
                <div class="shell-main">
                    <header class="shell-header">
                        <span class="shell-header__user">{caption}</span>
                        <button
                            class="shell-header__logout"
                            type="button"
                            on:click=move |_| session.logout()
                        >
                            "退出登录"
                        </button>
                    </header>
                    <main class="shell-content">{children()}</main>
                </div>
            </div>
        </Show>
    }
}
