use super::*;
use crate::data::meetings::{MeetingMode, MeetingStatus};
use crate::data::mentors::MentorStatus;
use crate::data::students::StudentStatus;
use crate::data::tasks::{TaskPriority, TaskStatus};

const STYLESHEET: &str = include_str!("../../style/main.css");

fn defines(class: &str) -> bool {
    STYLESHEET.contains(&format!(".{class} "))
}

#[test]
fn shared_badges_are_styled() {
    for class in [BADGE_GREEN, BADGE_RED, BADGE_BLUE, BADGE_GRAY, BADGE_YELLOW] {
        assert!(defines(class), "missing rule for {class}");
    }
}

#[test]
fn every_status_badge_is_styled() {
    let classes = [
        MentorStatus::Active.badge_class(),
        MentorStatus::Inactive.badge_class(),
        StudentStatus::Graduated.badge_class(),
        StudentStatus::Suspended.badge_class(),
        TaskPriority::High.badge_class(),
        TaskPriority::Medium.badge_class(),
        TaskPriority::Low.badge_class(),
        MeetingStatus::Scheduled.badge_class(),
        MeetingStatus::Completed.badge_class(),
    ];
    for class in classes {
        assert!(defines(class), "missing rule for {class}");
    }
}

#[test]
fn every_status_marker_is_styled() {
    let classes = [
        TaskStatus::Pending.marker_class(),
        TaskStatus::InProgress.marker_class(),
        TaskStatus::Completed.marker_class(),
        TaskStatus::Overdue.marker_class(),
        MeetingMode::Online.marker_class(),
        MeetingMode::Offline.marker_class(),
        MeetingMode::Hybrid.marker_class(),
    ];
    for class in classes {
        assert!(defines(class), "missing rule for {class}");
    }
}

#[test]
fn no_utility_framework_classes_remain() {
    for class in [BADGE_GREEN, TaskPriority::Medium.badge_class(), TaskStatus::Overdue.marker_class()] {
        assert!(!class.contains("bg-") && !class.contains("text-"), "{class}");
    }
}
