//! Choices offered on the settings page.
//!
//! The form is not wired to any backend; these tables only drive what the
//! inputs show.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SettingsSection {
    #[default]
    Profile,
    Notifications,
    Security,
    System,
}

impl SettingsSection {
    pub const ALL: [Self; 4] = [Self::Profile, Self::Notifications, Self::Security, Self::System];

    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "个人信息",
            Self::Notifications => "通知设置",
            Self::Security => "安全设置",
            Self::System => "系统设置",
        }
    }
}

/// A notification toggle and whether it starts enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationToggle {
    pub name: &'static str,
    pub label: &'static str,
    pub hint: &'static str,
    pub default_on: bool,
}

pub const NOTIFICATION_TOGGLES: [NotificationToggle; 4] = [
    NotificationToggle { name: "email", label: "邮件通知", hint: "接收重要更新的邮件通知", default_on: true },
    NotificationToggle { name: "browser", label: "浏览器通知", hint: "接收实时的浏览器推送通知", default_on: true },
    NotificationToggle {
        name: "taskReminders",
        label: "任务提醒",
        hint: "接收任务截止日期和更新提醒",
        default_on: true,
    },
    NotificationToggle {
        name: "meetingReminders",
        label: "会议提醒",
        hint: "接收会议开始前的提醒",
        default_on: true,
    },
];

/// `(value, label)` pairs for a `<select>`; the first entry is the default.
pub type Choices = &'static [(&'static str, &'static str)];

pub const LANGUAGES: Choices = &[("zh", "中文"), ("en", "English")];

pub const THEMES: Choices = &[("light", "浅色"), ("dark", "深色"), ("system", "跟随系统")];

pub const TIMEZONES: Choices = &[
    ("Asia/Shanghai", "中国标准时间 (UTC+8)"),
    ("Asia/Tokyo", "日本标准时间 (UTC+9)"),
    ("America/Los_Angeles", "太平洋标准时间 (UTC-8)"),
];

/// Label for `value`, if it is one of `choices`.
pub fn choice_label(choices: Choices, value: &str) -> Option<&'static str> {
    choices.iter().find(|(v, _)| *v == value).map(|(_, label)| *label)
}
