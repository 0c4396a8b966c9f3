//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::layout::DashboardLayout;
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, meetings::MeetingsPage, mentors::MentorsPage,
    settings::SettingsPage, statistics::StatisticsPage, students::StudentsPage, tasks::TasksPage,
};
use crate::state::session::SessionContext;

/// Root application component.
///
/// Builds the session container once, restoring any persisted login, and
/// provides it to every route through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SessionContext::init());

    view! {
        <Title text="研究生导师管理系统"/>

        <Router>
            <Routes fallback=|| "页面不存在".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <DashboardLayout><DashboardPage/></DashboardLayout> }
                />
                <Route
                    path=StaticSegment("mentors")
                    view=|| view! { <DashboardLayout><MentorsPage/></DashboardLayout> }
                />
                <Route
                    path=StaticSegment("students")
                    view=|| view! { <DashboardLayout><StudentsPage/></DashboardLayout> }
                />
                <Route
                    path=StaticSegment("tasks")
                    view=|| view! { <DashboardLayout><TasksPage/></DashboardLayout> }
                />
                <Route
                    path=StaticSegment("meetings")
                    view=|| view! { <DashboardLayout><MeetingsPage/></DashboardLayout> }
                />
                <Route
                    path=StaticSegment("statistics")
                    view=|| view! { <DashboardLayout><StatisticsPage/></DashboardLayout> }
                />
                <Route
                    path=StaticSegment("settings")
                    view=|| view! { <DashboardLayout><SettingsPage/></DashboardLayout> }
                />
                <Route path=StaticSegment("") view=|| view! { <Redirect path=mentorhub::guard::HOME_PATH/> }/>
            </Routes>
        </Router>
    }
}
