use super::*;

// =============================================================================
// Distribution
// =============================================================================

#[test]
fn largest_entry_fills_the_bar() {
    assert_eq!(STUDENT_GRADES.bar_width_percent(35), 100);
    assert_eq!(MENTOR_DEPARTMENTS.bar_width_percent(4), 50);
    assert_eq!(MENTOR_DEPARTMENTS.bar_width_percent(2), 25);
}

#[test]
fn empty_distribution_has_no_width() {
    let empty = Distribution { title: "空", entries: &[] };
    assert_eq!(empty.total(), 0);
    assert_eq!(empty.bar_width_percent(5), 0);
}

#[test]
fn out_of_range_value_is_clamped() {
    assert_eq!(MEETING_TYPES.bar_width_percent(1_000), 100);
}

// =============================================================================
// Figures
// =============================================================================

#[test]
fn distributions_agree_with_overview_totals() {
    assert_eq!(MENTOR_DEPARTMENTS.total(), OVERVIEW[0].total);
    assert_eq!(STUDENT_GRADES.total(), OVERVIEW[1].total);
    assert_eq!(MEETING_TYPES.total(), OVERVIEW[3].total);
}

#[test]
fn sub_counts_never_exceed_totals() {
    for card in OVERVIEW {
        assert!(card.detail <= card.total, "{}", card.name);
    }
}

#[test]
fn monthly_trend_covers_first_half_year() {
    let months: Vec<_> = MONTHLY_TASK_COMPLETION.entries.iter().map(|(m, _)| *m).collect();
    assert_eq!(months, ["1月", "2月", "3月", "4月", "5月", "6月"]);
}
