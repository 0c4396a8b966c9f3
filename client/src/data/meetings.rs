//! Scheduled meetings.

#[cfg(test)]
#[path = "meetings_test.rs"]
mod meetings_test;

use super::{BADGE_BLUE, BADGE_GRAY, BADGE_GREEN, BADGE_RED};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeetingKind {
    Research,
    Progress,
    Defense,
    Seminar,
    Other,
}

impl MeetingKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Research => "研究会议",
            Self::Progress => "进展汇报",
            Self::Defense => "论文答辩",
            Self::Seminar => "学术讨论",
            Self::Other => "其他",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeetingMode {
    Online,
    Offline,
    Hybrid,
}

impl MeetingMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Online => "线上",
            Self::Offline => "线下",
            Self::Hybrid => "混合",
        }
    }

    pub fn marker_class(self) -> &'static str {
        match self {
            Self::Online => "status-marker--blue",
            Self::Offline => "status-marker--green",
            Self::Hybrid => "status-marker--purple",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeetingStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl MeetingStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "已安排",
            Self::InProgress => "进行中",
            Self::Completed => "已结束",
            Self::Cancelled => "已取消",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Scheduled => BADGE_BLUE,
            Self::InProgress => BADGE_GREEN,
            Self::Completed => BADGE_GRAY,
            Self::Cancelled => BADGE_RED,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Meeting {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: MeetingKind,
    pub mode: MeetingMode,
    pub location: &'static str,
    pub date: &'static str,
    pub start_time: &'static str,
    pub end_time: &'static str,
    pub organizer: &'static str,
    pub participants: &'static [&'static str],
    pub description: &'static str,
    pub status: MeetingStatus,
    pub meeting_link: Option<&'static str>,
}

impl Meeting {
    /// `"14:00 - 16:00"`.
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }

    /// Participant names joined for a single table cell.
    pub fn participant_list(&self) -> String {
        self.participants.join("、")
    }
}

pub const MEETINGS: &[Meeting] = &[
    Meeting {
        id: "1",
        title: "研究生周进展汇报",
        kind: MeetingKind::Progress,
        mode: MeetingMode::Hybrid,
        location: "理工楼A201",
        date: "2024-02-15",
        start_time: "14:00",
        end_time: "16:00",
        organizer: "张教授",
        participants: &["王小明", "李小华", "张三"],
        description: "本周研究进展汇报会议，请准备PPT",
        status: MeetingStatus::Scheduled,
        meeting_link: Some("https://meet.example.com/abc123"),
    },
    Meeting {
        id: "2",
        title: "论文开题答辩",
        kind: MeetingKind::Defense,
        mode: MeetingMode::Offline,
        location: "综合楼B302",
        date: "2024-02-20",
        start_time: "09:00",
        end_time: "11:00",
        organizer: "李教授",
        participants: &["李小华", "评审专家1", "评审专家2"],
        description: "研究生论文开题答辩",
        status: MeetingStatus::Scheduled,
        meeting_link: None,
    },
];
