//! Mentor roster table.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;
use crate::components::status_badge::StatusBadge;
use crate::data::mentors::MENTORS;

#[component]
pub fn MentorsPage() -> impl IntoView {
    view! {
        <div class="list-page">
            <PageHeader title="导师管理" description="管理系统中的所有导师信息，包括个人信息、学生分配等。"/>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"导师姓名"</th>
                        <th>"职称"</th>
                        <th>"院系"</th>
                        <th>"研究方向"</th>
                        <th>"学生数量"</th>
                        <th>"状态"</th>
                    </tr>
                </thead>
                <tbody>
                    {MENTORS
                        .iter()
                        .map(|mentor| {
                            view! {
                                <tr>
                                    <td>
                                        <div class="data-table__primary">{mentor.name}</div>
                                        <div class="data-table__secondary">{mentor.email}</div>
                                    </td>
                                    <td>{mentor.title}</td>
                                    <td>{mentor.department}</td>
                                    <td>{mentor.specialization}</td>
                                    <td>{mentor.student_count}</td>
                                    <td>
                                        <StatusBadge label=mentor.status.label() class=mentor.status.badge_class()/>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
