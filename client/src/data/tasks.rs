//! Assigned research tasks.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use super::{BADGE_GREEN, BADGE_RED, BADGE_YELLOW};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

impl TaskPriority {
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "高",
            Self::Medium => "中",
            Self::Low => "低",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::High => BADGE_RED,
            Self::Medium => BADGE_YELLOW,
            Self::Low => BADGE_GREEN,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Overdue,
}

impl TaskStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "待处理",
            Self::InProgress => "进行中",
            Self::Completed => "已完成",
            Self::Overdue => "已逾期",
        }
    }

    /// Text color for the status marker next to the label.
    pub fn marker_class(self) -> &'static str {
        match self {
            Self::Pending => "status-marker--gray",
            Self::InProgress => "status-marker--blue",
            Self::Completed => "status-marker--green",
            Self::Overdue => "status-marker--red",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskKind {
    Research,
    Paper,
    Presentation,
    Meeting,
    Other,
}

impl TaskKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Research => "研究",
            Self::Paper => "论文",
            Self::Presentation => "演示",
            Self::Meeting => "会议",
            Self::Other => "其他",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Task {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub assigned_to: &'static str,
    pub assigned_by: &'static str,
    pub due_date: &'static str,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub kind: TaskKind,
    pub created_at: &'static str,
    pub updated_at: &'static str,
}

pub const TASKS: &[Task] = &[
    Task {
        id: "1",
        title: "提交研究进展报告",
        description: "详细描述本月研究工作的进展、遇到的问题和下一步计划",
        assigned_to: "王小明",
        assigned_by: "张教授",
        due_date: "2024-02-20",
        priority: TaskPriority::High,
        status: TaskStatus::Pending,
        kind: TaskKind::Research,
        created_at: "2024-02-01",
        updated_at: "2024-02-01",
    },
    Task {
        id: "2",
        title: "准备学术报告演示",
        description: "准备下周组会的研究进展演示PPT",
        assigned_to: "李小华",
        assigned_by: "李教授",
        due_date: "2024-02-15",
        priority: TaskPriority::Medium,
        status: TaskStatus::InProgress,
        kind: TaskKind::Presentation,
        created_at: "2024-02-01",
        updated_at: "2024-02-05",
    },
];
