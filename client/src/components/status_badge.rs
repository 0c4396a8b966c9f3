//! Pill badge for status columns.

use leptos::prelude::*;

#[component]
pub fn StatusBadge(label: &'static str, class: &'static str) -> impl IntoView {
    view! {
        <span class=format!("status-badge {class}")>{label}</span>
    }
}
