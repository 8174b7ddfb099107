use shiftplanner::core::expander::expand;
use shiftplanner::core::registry::ShiftRegistry;
use shiftplanner::errors::AppError;
use shiftplanner::models::shift_type::ShiftType::*;

mod common;
use common::d;

#[test]
fn test_set_shift_overwrites_single_day() {
    let mut reg = ShiftRegistry::new();
    reg.set_shift(d("2024-01-01"), Day);
    reg.set_shift(d("2024-01-01"), Night);

    assert_eq!(reg.shifts().len(), 1);
    assert_eq!(reg.shift_on(&d("2024-01-01")), Some(Night));
    assert!(reg.pattern_groups().is_empty());
}

#[test]
fn test_add_pattern_group_records_group_and_overwrites_days() {
    let mut reg = ShiftRegistry::new();
    reg.set_shift(d("2024-01-02"), Night);
    reg.set_shift(d("2024-01-20"), Evening);

    let group = reg
        .add_pattern_group(d("2024-01-01"), d("2024-01-04"), vec![Day, Off])
        .unwrap()
        .clone();

    assert_eq!(group.pattern, vec![Day, Off]);
    assert_eq!(group.start_date, d("2024-01-01"));
    assert_eq!(group.end_date, d("2024-01-04"));
    assert!(!group.id.is_empty());

    // manual value inside the range is replaced, the one outside survives
    assert_eq!(reg.shift_on(&d("2024-01-02")), Some(Off));
    assert_eq!(reg.shift_on(&d("2024-01-20")), Some(Evening));
    assert_eq!(reg.pattern_groups().len(), 1);
}

#[test]
fn test_group_ids_are_unique() {
    let mut reg = ShiftRegistry::new();
    let a = reg
        .add_pattern_group(d("2024-01-01"), d("2024-01-02"), vec![Day])
        .unwrap()
        .id
        .clone();
    let b = reg
        .add_pattern_group(d("2024-01-01"), d("2024-01-02"), vec![Day])
        .unwrap()
        .id
        .clone();
    assert_ne!(a, b);
}

#[test]
fn test_failed_add_leaves_registry_untouched() {
    let mut reg = ShiftRegistry::new();
    reg.set_shift(d("2024-01-05"), Day);
    let before = reg.clone();

    let err = reg
        .add_pattern_group(d("2024-01-10"), d("2024-01-01"), vec![Day])
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidRange { .. }));

    let err = reg
        .add_pattern_group(d("2024-01-01"), d("2024-01-10"), vec![])
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidPattern(_)));

    assert_eq!(reg, before);
}

#[test]
fn test_update_dates_matches_fresh_expansion() {
    let pattern = vec![Day, Off, Night];
    let mut reg = ShiftRegistry::new();
    let id = reg
        .add_pattern_group(d("2024-01-01"), d("2024-01-10"), pattern.clone())
        .unwrap()
        .id
        .clone();

    let updated = reg
        .update_pattern_group_dates(&id, d("2024-01-05"), d("2024-01-15"))
        .unwrap()
        .expect("group exists");

    assert_eq!(updated.id, id);
    assert_eq!(updated.start_date, d("2024-01-05"));
    assert_eq!(updated.end_date, d("2024-01-15"));

    // days only in the old range are gone
    for day in d("2024-01-01").iter_to(d("2024-01-04")) {
        assert_eq!(reg.shift_on(&day), None, "{day}");
    }

    // the new range restarts the sequence at its own start
    let fresh = expand(d("2024-01-05"), d("2024-01-15"), &pattern).unwrap();
    assert_eq!(reg.shifts(), &fresh);
    assert_eq!(reg.shift_on(&d("2024-01-05")), Some(Day));

    let stored = reg.pattern_group(&id).unwrap();
    assert_eq!(stored.start_date, d("2024-01-05"));
    assert_eq!(stored.end_date, d("2024-01-15"));
}

#[test]
fn test_update_dates_clears_old_range_whoever_wrote_it() {
    let mut reg = ShiftRegistry::new();
    let id = reg
        .add_pattern_group(d("2024-01-01"), d("2024-01-10"), vec![Day])
        .unwrap()
        .id
        .clone();
    reg.add_pattern_group(d("2024-01-08"), d("2024-01-12"), vec![Night])
        .unwrap();
    reg.set_shift(d("2024-01-03"), Evening);

    reg.update_pattern_group_dates(&id, d("2024-01-20"), d("2024-01-21"))
        .unwrap()
        .unwrap();

    // manual edit and the overlapping group's days inside the old range are dropped
    assert_eq!(reg.shift_on(&d("2024-01-03")), None);
    assert_eq!(reg.shift_on(&d("2024-01-09")), None);
    // outside the old range the other group is intact
    assert_eq!(reg.shift_on(&d("2024-01-11")), Some(Night));
    assert_eq!(reg.shift_on(&d("2024-01-20")), Some(Day));
    assert_eq!(reg.pattern_groups().len(), 2);
}

#[test]
fn test_update_unknown_id_is_noop() {
    let mut reg = ShiftRegistry::new();
    reg.add_pattern_group(d("2024-01-01"), d("2024-01-04"), vec![Day, Off])
        .unwrap();
    let before = reg.clone();

    let res = reg
        .update_pattern_group_dates("no-such-id", d("2024-02-01"), d("2024-02-10"))
        .unwrap();

    assert!(res.is_none());
    assert_eq!(reg, before);
}

#[test]
fn test_update_with_inverted_range_changes_nothing() {
    let mut reg = ShiftRegistry::new();
    let id = reg
        .add_pattern_group(d("2024-01-01"), d("2024-01-04"), vec![Day, Off])
        .unwrap()
        .id
        .clone();
    let before = reg.clone();

    let err = reg
        .update_pattern_group_dates(&id, d("2024-01-10"), d("2024-01-05"))
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidRange { .. }));
    assert_eq!(reg, before);
}

#[test]
fn test_find_group_is_first_match() {
    let mut reg = ShiftRegistry::new();
    let first = reg
        .add_pattern_group(d("2024-01-01"), d("2024-01-10"), vec![Day])
        .unwrap()
        .id
        .clone();
    let second = reg
        .add_pattern_group(d("2024-01-05"), d("2024-01-15"), vec![Night])
        .unwrap()
        .id
        .clone();

    // overlap: the value comes from the later group, the lookup from the earlier one
    assert_eq!(reg.shift_on(&d("2024-01-07")), Some(Night));
    assert_eq!(
        reg.find_pattern_group_for_date(&d("2024-01-07")).unwrap().id,
        first
    );
    assert_eq!(
        reg.find_pattern_group_for_date(&d("2024-01-12")).unwrap().id,
        second
    );
    assert!(reg.find_pattern_group_for_date(&d("2024-01-16")).is_none());
}

#[test]
fn test_find_group_includes_both_bounds() {
    let mut reg = ShiftRegistry::new();
    reg.add_pattern_group(d("2024-03-01"), d("2024-03-31"), vec![Day, Off])
        .unwrap();

    assert!(reg.find_pattern_group_for_date(&d("2024-03-01")).is_some());
    assert!(reg.find_pattern_group_for_date(&d("2024-03-31")).is_some());
    assert!(reg.find_pattern_group_for_date(&d("2024-02-29")).is_none());
    assert!(reg.find_pattern_group_for_date(&d("2024-04-01")).is_none());
}

#[test]
fn test_clear_shifts_empties_map_and_groups() {
    let mut reg = ShiftRegistry::new();
    reg.add_pattern_group(d("2024-01-01"), d("2024-01-31"), vec![Day, Night, Off])
        .unwrap();
    reg.set_shift(d("2024-02-01"), Evening);

    reg.clear_shifts();

    assert!(reg.shifts().is_empty());
    assert!(reg.pattern_groups().is_empty());
    assert_eq!(reg, ShiftRegistry::default());
}

#[test]
fn test_shifts_in_month_filters_by_calendar_month() {
    let mut reg = ShiftRegistry::new();
    reg.add_pattern_group(d("2024-01-30"), d("2024-02-02"), vec![Day])
        .unwrap();

    let feb = reg.shifts_in_month(2024, 2);
    let keys: Vec<String> = feb.keys().map(|k| k.to_string()).collect();
    assert_eq!(keys, vec!["2024-02-01", "2024-02-02"]);
    assert!(reg.shifts_in_month(2024, 3).is_empty());
}
