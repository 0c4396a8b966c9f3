use super::*;

#[test]
fn welcome_line_uses_display_name() {
    assert_eq!(welcome_line(Some("测试用户")), "欢迎回来, 测试用户");
}

#[test]
fn welcome_line_without_name_is_bare() {
    assert_eq!(welcome_line(None), "欢迎回来");
    assert_eq!(welcome_line(Some("  ")), "欢迎回来");
}

#[test]
fn four_stat_cards() {
    let names: Vec<_> = STATS.iter().map(|s| s.name).collect();
    assert_eq!(names, ["总导师数", "总学生数", "待处理任务", "本周会议"]);
}

#[test]
fn connector_skips_last_activity() {
    let len = RECENT_ACTIVITIES.len();
    assert!(has_connector(0, len));
    assert!(has_connector(len - 2, len));
    assert!(!has_connector(len - 1, len));
}
