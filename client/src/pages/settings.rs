//! Settings page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Presentational only: the inputs keep local state and "保存更改" does not
//! send anything. Profile fields start from the signed-in user.

use leptos::prelude::*;

use crate::data::settings::{Choices, LANGUAGES, NOTIFICATION_TOGGLES, SettingsSection, THEMES, TIMEZONES};
use crate::state::session::SessionContext;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let active = RwSignal::new(SettingsSection::default());

    view! {
        <div class="settings-page">
            <aside class="settings-nav">
                {SettingsSection::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <button
                                type="button"
                                class="settings-nav__item"
                                class=("settings-nav__item--active", move || active.get() == section)
                                on:click=move |_| active.set(section)
                            >
                                {section.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </aside>
            <form class="settings-form" on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                <h3 class="settings-form__title">{move || active.get().label()}</h3>
                {move || match active.get() {
                    SettingsSection::Profile => view! { <ProfileFields/> }.into_any(),
                    SettingsSection::Notifications => view! { <NotificationFields/> }.into_any(),
                    SettingsSection::Security => view! { <SecurityFields/> }.into_any(),
                    SettingsSection::System => view! { <SystemFields/> }.into_any(),
                }}
                <button class="login-button" type="submit">"保存更改"</button>
            </form>
        </div>
    }
}

#[component]
fn ProfileFields() -> impl IntoView {
    let state = expect_context::<SessionContext>().state;
    let (name, email) = state.with_untracked(|s| {
        s.user().map(|u| (u.name.clone(), u.email.clone())).unwrap_or_default()
    });

    view! {
        <p class="settings-form__hint">"JPG, PNG, GIF 格式，最大 2MB"</p>
        <label class="settings-field">"更换头像"<input type="file" accept="image/*"/></label>
        <label class="settings-field">"姓名"<input class="login-input" type="text" name="name" value=name/></label>
        <label class="settings-field">"邮箱"<input class="login-input" type="email" name="email" value=email/></label>
        <label class="settings-field">"手机号"<input class="login-input" type="tel" name="phone"/></label>
        <label class="settings-field">"职称"<input class="login-input" type="text" name="title"/></label>
    }
}

#[component]
fn NotificationFields() -> impl IntoView {
    NOTIFICATION_TOGGLES
        .into_iter()
        .map(|toggle| {
            view! {
                <label class="settings-toggle">
                    <input type="checkbox" name=toggle.name checked=toggle.default_on/>
                    <span class="settings-toggle__label">{toggle.label}</span>
                    <span class="settings-form__hint">{toggle.hint}</span>
                </label>
            }
        })
        .collect_view()
}

#[component]
fn SecurityFields() -> impl IntoView {
    view! {
        <label class="settings-field">"当前密码"<input class="login-input" type="password"/></label>
        <label class="settings-field">"新密码"<input class="login-input" type="password"/></label>
        <label class="settings-field">"确认新密码"<input class="login-input" type="password"/></label>
        <button class="settings-field__action" type="button">"启用双因素认证"</button>
    }
}

#[component]
fn SystemFields() -> impl IntoView {
    view! {
        <ChoiceField label="语言" name="language" choices=LANGUAGES/>
        <ChoiceField label="主题" name="theme" choices=THEMES/>
        <ChoiceField label="时区" name="timezone" choices=TIMEZONES/>
    }
}

/// `<select>` with the first choice preselected.
#[component]
fn ChoiceField(label: &'static str, name: &'static str, choices: Choices) -> impl IntoView {
    view! {
        <label class="settings-field">
            {label}
            <select class="login-input" name=name>
                {choices
                    .iter()
                    .enumerate()
                    .map(|(idx, &(value, text))| view! { <option value=value selected={idx == 0}>{text}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}
