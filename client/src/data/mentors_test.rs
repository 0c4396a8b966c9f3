use super::*;

#[test]
fn status_labels_and_badges() {
    assert_eq!(MentorStatus::Active.label(), "在职");
    assert_eq!(MentorStatus::Inactive.label(), "离职");
    assert_eq!(MentorStatus::Active.badge_class(), "status-badge--green");
    assert_eq!(MentorStatus::Inactive.badge_class(), "status-badge--red");
}

#[test]
fn roster_ids_are_unique() {
    let mut ids: Vec<_> = MENTORS.iter().map(|m| m.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), MENTORS.len());
}
