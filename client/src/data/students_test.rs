use super::*;
use crate::data::mentors::MENTORS;

#[test]
fn status_labels_and_badges() {
    assert_eq!(StudentStatus::Active.label(), "在读");
    assert_eq!(StudentStatus::Graduated.label(), "已毕业");
    assert_eq!(StudentStatus::Suspended.label(), "休学");
    assert_eq!(StudentStatus::Graduated.badge_class(), "status-badge--blue");
    assert_eq!(StudentStatus::Suspended.badge_class(), "status-badge--red");
}

#[test]
fn gpa_renders_one_decimal() {
    assert_eq!(STUDENTS[0].gpa_display(), "3.8");
    assert_eq!(STUDENTS[1].gpa_display(), "3.9");
}

#[test]
fn every_student_mentor_is_on_the_roster() {
    for student in STUDENTS {
        assert!(MENTORS.iter().any(|m| m.name == student.mentor), "{}", student.name);
    }
}
