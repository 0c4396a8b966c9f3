//! Meeting schedule table.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;
use crate::components::status_badge::StatusBadge;
use crate::data::meetings::MEETINGS;

#[component]
pub fn MeetingsPage() -> impl IntoView {
    view! {
        <div class="list-page">
            <PageHeader title="会议管理" description="管理所有研究生和导师的会议安排。"/>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"会议信息"</th>
                        <th>"时间地点"</th>
                        <th>"组织者"</th>
                        <th>"参会人员"</th>
                        <th>"状态"</th>
                    </tr>
                </thead>
                <tbody>
                    {MEETINGS
                        .iter()
                        .map(|meeting| {
                            view! {
                                <tr>
                                    <td>
                                        <div class="data-table__primary">{meeting.title}</div>
                                        <div class="data-table__tag">{meeting.kind.label()}</div>
                                        <div class="data-table__secondary">{meeting.description}</div>
                                    </td>
                                    <td>
                                        <div>{meeting.date}" "{meeting.time_range()}</div>
                                        <div class="data-table__secondary">
                                            <span class=format!("status-marker {}", meeting.mode.marker_class())>
                                                {meeting.mode.label()}
                                            </span>
                                            " "{meeting.location}
                                        </div>
                                        {meeting
                                            .meeting_link
                                            .map(|link| {
                                                view! {
                                                    <a class="data-table__link" href=link target="_blank">
                                                        "会议链接"
                                                    </a>
                                                }
                                            })}
                                    </td>
                                    <td>{meeting.organizer}</td>
                                    <td>{meeting.participant_list()}</td>
                                    <td>
                                        <StatusBadge label=meeting.status.label() class=meeting.status.badge_class()/>
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
