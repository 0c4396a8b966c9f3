//! Task tracking table.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;
use crate::components::status_badge::StatusBadge;
use crate::data::tasks::TASKS;

#[component]
pub fn TasksPage() -> impl IntoView {
    view! {
        <div class="list-page">
            <PageHeader title="任务管理" description="管理和跟踪所有研究生和导师的任务进度。"/>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"任务信息"</th>
                        <th>"分配信息"</th>
                        <th>"截止日期"</th>
                        <th>"优先级"</th>
                        <th>"状态"</th>
                    </tr>
                </thead>
                <tbody>
                    {TASKS
                        .iter()
                        .map(|task| {
                            view! {
                                <tr>
                                    <td>
                                        <div class="data-table__primary">{task.title}</div>
                                        <div class="data-table__secondary">{task.description}</div>
                                        <div class="data-table__tag">{task.kind.label()}</div>
                                    </td>
                                    <td>
                                        <div>{format!("负责人: {}", task.assigned_to)}</div>
                                        <div class="data-table__secondary">
                                            {format!("分配人: {}", task.assigned_by)}
                                        </div>
                                    </td>
                                    <td>{task.due_date}</td>
                                    <td>
                                        <StatusBadge label=task.priority.label() class=task.priority.badge_class()/>
                                    </td>
                                    <td>
                                        <span class=format!("status-marker {}", task.status.marker_class())>"●"</span>
                                        {task.status.label()}
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
