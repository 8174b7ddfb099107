use shiftplanner::cli::commands::rules::apply_setting;
use shiftplanner::errors::AppError;
use shiftplanner::models::preset::{PatternPreset, RangePreset};
use shiftplanner::models::salary_rules::SalaryRules;
use shiftplanner::models::shift_date::ShiftDate;
use shiftplanner::models::shift_type::ShiftType::{self, *};
use shiftplanner::utils::date::{parse_month, resolve_period};
use shiftplanner::utils::format_money;

mod common;
use common::{approx, d};

#[test]
fn test_shift_date_accepts_only_canonical_form() {
    assert_eq!(d("2024-02-29").to_string(), "2024-02-29");

    for bad in ["2024-1-05", "2024-01-5", "2023-02-29", "2024-13-01", "05/01/2024", ""] {
        let err = ShiftDate::parse(bad).unwrap_err();
        assert!(matches!(err, AppError::InvalidDate(_)), "{bad}");
    }
}

#[test]
fn test_shift_date_serializes_as_string() {
    let json = serde_json::to_string(&d("2024-01-05")).unwrap();
    assert_eq!(json, "\"2024-01-05\"");

    let back: ShiftDate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, d("2024-01-05"));
    assert!(serde_json::from_str::<ShiftDate>("\"2024-1-5\"").is_err());
}

#[test]
fn test_weekend_detection() {
    assert!(d("2024-01-06").is_weekend());
    assert!(d("2024-01-07").is_weekend());
    assert!(!d("2024-01-08").is_weekend());
}

#[test]
fn test_shift_type_parsing() {
    assert_eq!("day".parse::<ShiftType>().unwrap(), Day);
    assert_eq!("NIGHT".parse::<ShiftType>().unwrap(), Night);
    assert_eq!(" Evening ".parse::<ShiftType>().unwrap(), Evening);
    assert!(matches!(
        "holiday".parse::<ShiftType>(),
        Err(AppError::InvalidShiftType(_))
    ));

    assert_eq!(
        ShiftType::parse_sequence("day, day,night,off").unwrap(),
        vec![Day, Day, Night, Off]
    );
    assert!(ShiftType::parse_sequence("day,swing").is_err());

    for bad in ["day,,off", "day,off,", ",day", "", " , "] {
        assert!(
            matches!(
                ShiftType::parse_sequence(bad),
                Err(AppError::InvalidShiftType(_))
            ),
            "{bad:?}"
        );
    }
}

#[test]
fn test_presets() {
    assert_eq!(PatternPreset::Pongdang.pattern(), vec![Day, Off]);
    assert_eq!(
        PatternPreset::ThreeShift.pattern(),
        vec![Day, Evening, Night, Off]
    );
    assert_eq!(
        PatternPreset::TwoTwo.pattern(),
        vec![Day, Day, Night, Night, Off, Off]
    );
}

#[test]
fn test_range_presets() {
    let today = d("2024-01-31");

    let (s, e) = RangePreset::Today.resolve(today, 6, None, None).unwrap();
    assert_eq!((s, e), (d("2024-01-31"), d("2024-07-31")));

    // month arithmetic clamps to the last valid day
    let (_, e) = RangePreset::Today.resolve(today, 1, None, None).unwrap();
    assert_eq!(e, d("2024-02-29"));

    let (s, e) = RangePreset::Month.resolve(today, 6, None, None).unwrap();
    assert_eq!((s, e), (d("2024-01-01"), d("2024-01-31")));

    let (s, e) = RangePreset::Custom
        .resolve(today, 6, Some(d("2024-03-01")), Some(d("2024-03-05")))
        .unwrap();
    assert_eq!((s, e), (d("2024-03-01"), d("2024-03-05")));

    assert!(
        RangePreset::Custom
            .resolve(today, 6, Some(d("2024-03-01")), None)
            .is_err()
    );
}

#[test]
fn test_apply_setting_converts_percent() {
    let mut rules = SalaryRules::default();

    apply_setting(&mut rules, "night_rate=30").unwrap();
    apply_setting(&mut rules, "weekend_rate=25%").unwrap();
    apply_setting(&mut rules, "hourly_wage=12500").unwrap();
    apply_setting(&mut rules, "weekly_holiday_pay=no").unwrap();
    apply_setting(&mut rules, "weekly_work_days=6").unwrap();

    assert!(approx(rules.night_allowance_rate, 0.3));
    assert!(approx(rules.weekend_allowance_rate, 0.25));
    assert!(approx(rules.hourly_wage, 12500.0));
    assert!(!rules.weekly_holiday_pay_enabled);
    assert_eq!(rules.weekly_work_days, 6);
}

#[test]
fn test_apply_setting_rejects_bad_input() {
    let mut rules = SalaryRules::default();

    for bad in [
        "hourly_wage",
        "hourly_wage=-5",
        "hourly_wage=abc",
        "night_rate=NaN",
        "bonus=10",
        "weekly_work_days=2.5",
        "weekly_holiday_pay=maybe",
    ] {
        let err = apply_setting(&mut rules, bad).unwrap_err();
        assert!(matches!(err, AppError::InvalidRules(_)), "{bad}");
    }

    assert_eq!(rules, SalaryRules::default());
}

#[test]
fn test_period_parsing() {
    assert_eq!(parse_month("2024-02").unwrap(), (2024, 2));
    assert!(parse_month("2024-2").is_err());
    assert!(parse_month("2024-13").is_err());

    let (s, e) = resolve_period("2024-02").unwrap();
    assert_eq!((s, e), (d("2024-02-01"), d("2024-02-29")));

    let (s, e) = resolve_period("2024").unwrap();
    assert_eq!((s, e), (d("2024-01-01"), d("2024-12-31")));

    let (s, e) = resolve_period("2024-01:2024-03").unwrap();
    assert_eq!((s, e), (d("2024-01-01"), d("2024-03-31")));

    assert!(matches!(
        resolve_period("2024-03:2024-01"),
        Err(AppError::InvalidRange { .. })
    ));
}

#[test]
fn test_format_money() {
    assert_eq!(format_money(0), "0");
    assert_eq!(format_money(999), "999");
    assert_eq!(format_money(2_880_000), "2,880,000");
    assert_eq!(format_money(-1_234), "-1,234");
}

#[test]
fn test_db_path_resolution() {
    use shiftplanner::utils::path::{expand_tilde, resolve_db_path};
    use std::path::Path;

    let base = Path::new("/var/lib/shiftplanner");
    assert_eq!(
        resolve_db_path("work.sqlite", base),
        base.join("work.sqlite")
    );
    assert_eq!(
        resolve_db_path("/tmp/work.sqlite", base),
        Path::new("/tmp/work.sqlite")
    );
    assert_eq!(expand_tilde("plain/file.csv"), Path::new("plain/file.csv"));
    assert_eq!(expand_tilde("~user/x"), Path::new("~user/x"));

    if let Some(home) = dirs::home_dir() {
        assert_eq!(expand_tilde("~/a.json"), home.join("a.json"));
        assert_eq!(expand_tilde("~"), home);
    }
}

#[test]
fn test_table_pads_on_visible_width() {
    use shiftplanner::utils::colors::{RED, paint};
    use shiftplanner::utils::table::{Column, Table};

    let mut table = Table::new(vec![Column::left("DATE"), Column::right("PAY")]);
    table.add_row(vec![paint(RED, "2024-01-06"), "144,000".into()]);
    table.add_row(vec!["2024-01-07".into(), "0".into()]);

    let out = table.render();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "DATE            PAY");
    assert_eq!(lines[1], "-".repeat(19));
    assert!(lines[2].ends_with("2024-01-06\u{1b}[0m  144,000"));
    assert_eq!(lines[3], "2024-01-07        0");
}
