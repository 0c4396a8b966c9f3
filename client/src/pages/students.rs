//! Student roster table.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;
use crate::components::status_badge::StatusBadge;
use crate::data::students::STUDENTS;

#[component]
pub fn StudentsPage() -> impl IntoView {
    view! {
        <div class="list-page">
            <PageHeader
                title="学生管理"
                description="管理系统中的所有学生信息，包括个人信息、导师分配、研究方向等。"
            />
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"学生信息"</th>
                        <th>"年级/专业"</th>
                        <th>"导师"</th>
                        <th>"研究方向"</th>
                        <th>"GPA"</th>
                        <th>"状态"</th>
                    </tr>
                </thead>
                <tbody>
                    {STUDENTS
                        .iter()
                        .map(|student| {
                            view! {
                                <tr>
                                    <td>
                                        <div class="data-table__primary">{student.name}</div>
                                        <div class="data-table__secondary">{student.student_id}</div>
                                    </td>
                                    <td>
                                        <div>{student.grade}</div>
                                        <div class="data-table__secondary">{student.major}</div>
                                    </td>
                                    <td>{student.mentor}</td>
                                    <td>{student.research_topic}</td>
                                    <td>{student.gpa_display()}</td>
                                    <td>
                                        <StatusBadge label=student.status.label() class=student.status.badge_class()/>
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
