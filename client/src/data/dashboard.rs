//! Overview figures and the recent activity feed.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub name: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Activity {
    pub id: u32,
    pub kind: &'static str,
    pub content: &'static str,
    pub when: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { name: "总导师数", value: "12 位" },
    Stat { name: "总学生数", value: "120 位" },
    Stat { name: "待处理任务", value: "8 个" },
    Stat { name: "本周会议", value: "4 场" },
];

pub const RECENT_ACTIVITIES: &[Activity] = &[
    Activity { id: 1, kind: "任务", content: "张导师发布了新的研究计划", when: "10 分钟前" },
    Activity { id: 2, kind: "会议", content: "下周三下午2点项目进度讨论会", when: "1 小时前" },
    Activity { id: 3, kind: "通知", content: "请及时提交月度总结报告", when: "2 小时前" },
];

/// Heading shown above the stat cards. Falls back to a bare greeting when the
/// user record is not available yet.
pub fn welcome_line(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => format!("欢迎回来, {name}"),
        _ => "欢迎回来".to_owned(),
    }
}

/// The timeline connector is drawn under every entry except the last.
pub fn has_connector(index: usize, len: usize) -> bool {
    index + 1 < len
}
