use super::*;

#[test]
fn priority_labels_and_badges() {
    assert_eq!(TaskPriority::High.label(), "高");
    assert_eq!(TaskPriority::Low.label(), "低");
    assert_eq!(TaskPriority::Medium.badge_class(), "status-badge--yellow");
}

#[test]
fn status_labels() {
    let labels: Vec<_> = [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Completed, TaskStatus::Overdue]
        .into_iter()
        .map(TaskStatus::label)
        .collect();
    assert_eq!(labels, ["待处理", "进行中", "已完成", "已逾期"]);
    assert_eq!(TaskStatus::Overdue.marker_class(), "status-marker--red");
}

#[test]
fn kind_labels() {
    assert_eq!(TaskKind::Research.label(), "研究");
    assert_eq!(TaskKind::Presentation.label(), "演示");
    assert_eq!(TaskKind::Other.label(), "其他");
}

#[test]
fn sample_dates_are_iso_and_ordered() {
    for task in TASKS {
        assert_eq!(task.due_date.len(), 10, "{}", task.title);
        assert!(task.created_at <= task.updated_at, "{}", task.title);
    }
}
