use super::*;

#[test]
fn kind_and_mode_labels() {
    assert_eq!(MeetingKind::Progress.label(), "进展汇报");
    assert_eq!(MeetingKind::Defense.label(), "论文答辩");
    assert_eq!(MeetingMode::Hybrid.label(), "混合");
    assert_eq!(MeetingMode::Online.marker_class(), "status-marker--blue");
}

#[test]
fn status_labels_and_badges() {
    assert_eq!(MeetingStatus::Scheduled.label(), "已安排");
    assert_eq!(MeetingStatus::Completed.label(), "已结束");
    assert_eq!(MeetingStatus::Cancelled.badge_class(), "status-badge--red");
    assert_eq!(MeetingStatus::Completed.badge_class(), "status-badge--gray");
}

#[test]
fn time_range_and_participants_format() {
    let first = &MEETINGS[0];
    assert_eq!(first.time_range(), "14:00 - 16:00");
    assert_eq!(first.participant_list(), "王小明、李小华、张三");
}

#[test]
fn only_remote_capable_meetings_carry_a_link() {
    for meeting in MEETINGS {
        let remote = meeting.mode != MeetingMode::Offline;
        assert_eq!(meeting.meeting_link.is_some(), remote, "{}", meeting.title);
    }
}
