use shiftplanner::core::expander::expand;
use shiftplanner::errors::AppError;
use shiftplanner::models::shift_type::ShiftType::{self, *};

mod common;
use common::d;

#[test]
fn test_day_off_alternates_from_start() {
    let map = expand(d("2024-01-01"), d("2024-01-04"), &[Day, Off]).unwrap();

    let got: Vec<(String, ShiftType)> = map.iter().map(|(k, v)| (k.to_string(), *v)).collect();
    assert_eq!(
        got,
        vec![
            ("2024-01-01".to_string(), Day),
            ("2024-01-02".to_string(), Off),
            ("2024-01-03".to_string(), Day),
            ("2024-01-04".to_string(), Off),
        ]
    );
}

#[test]
fn test_every_day_of_range_is_assigned() {
    let pattern = [Day, Day, Night, Night, Off, Off];
    let start = d("2024-01-01");
    let end = d("2024-03-31");

    let map = expand(start, end, &pattern).unwrap();

    // 2024 is a leap year: 31 + 29 + 31
    assert_eq!(map.len(), 91);
    for (i, day) in start.iter_to(end).enumerate() {
        assert_eq!(map.get(&day), Some(&pattern[i % pattern.len()]), "{day}");
    }
}

#[test]
fn test_expand_is_deterministic() {
    let pattern = [Day, Evening, Night, Off];
    let a = expand(d("2025-02-10"), d("2025-05-01"), &pattern).unwrap();
    let b = expand(d("2025-02-10"), d("2025-05-01"), &pattern).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_single_day_range() {
    let map = expand(d("2024-06-15"), d("2024-06-15"), &[Night, Off]).unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&d("2024-06-15")), Some(&Night));
}

#[test]
fn test_pattern_runs_across_year_end() {
    let map = expand(d("2023-12-30"), d("2024-01-02"), &[Night, Off, Day]).unwrap();
    assert_eq!(map.get(&d("2023-12-30")), Some(&Night));
    assert_eq!(map.get(&d("2023-12-31")), Some(&Off));
    assert_eq!(map.get(&d("2024-01-01")), Some(&Day));
    assert_eq!(map.get(&d("2024-01-02")), Some(&Night));
}

#[test]
fn test_inverted_range_is_rejected() {
    let err = expand(d("2024-01-10"), d("2024-01-01"), &[Day]).unwrap_err();
    assert!(matches!(err, AppError::InvalidRange { .. }), "{err}");
}

#[test]
fn test_empty_pattern_is_rejected() {
    let err = expand(d("2024-01-01"), d("2024-01-10"), &[]).unwrap_err();
    assert!(matches!(err, AppError::InvalidPattern(_)), "{err}");

    // pattern is checked before the range
    let err = expand(d("2024-01-10"), d("2024-01-01"), &[]).unwrap_err();
    assert!(matches!(err, AppError::InvalidPattern(_)), "{err}");
}
