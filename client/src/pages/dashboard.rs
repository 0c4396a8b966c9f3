//! Dashboard landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! First route after sign-in. Greets the signed-in user and shows the
//! overview figures and recent activity from `data::dashboard`.

use leptos::prelude::*;

use crate::data::dashboard::{RECENT_ACTIVITIES, STATS, has_connector, welcome_line};
use crate::state::session::SessionContext;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = expect_context::<SessionContext>().state;
    let heading = move || state.with(|s| welcome_line(s.user().map(|u| u.name.as_str())));
    let total = RECENT_ACTIVITIES.len();

    view! {
        <div class="dashboard-page">
            <h1 class="page-header__title">{heading}</h1>
            <dl class="stat-grid">
                {STATS
                    .into_iter()
                    .map(|stat| {
                        view! {
                            <div class="stat-card">
                                <dt class="stat-card__name">{stat.name}</dt>
                                <dd class="stat-card__value">{stat.value}</dd>
                            </div>
                        }
                    })
                    .collect_view()}
            </dl>
            <section class="activity">
                <h2 class="activity__title">"最近活动"</h2>
                <ul class="activity__list">
                    {RECENT_ACTIVITIES
                        .iter()
                        .enumerate()
                        .map(|(idx, activity)| {
                            view! {
                                <li class="activity__item">
                                    <Show when=move || has_connector(idx, total)>
                                        <span class="activity__connector" aria-hidden="true"></span>
                                    </Show>
                                    <div class="activity__kind">{activity.kind}</div>
                                    <p class="activity__when">{activity.when}</p>
                                    <p class="activity__content">{activity.content}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        </div>
    }
}
