//! Title block shared by the list pages.

use leptos::prelude::*;

#[component]
pub fn PageHeader(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="page-header">
            <h1 class="page-header__title">{title}</h1>
            <p class="page-header__description">{description}</p>
        </div>
    }
}
