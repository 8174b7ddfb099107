use shiftplanner::core::calculator::monthly::weekly_holiday_pay;
use shiftplanner::core::calculator::{
    calculate_daily_salary, calculate_monthly_salary, daily_breakdown,
};
use shiftplanner::core::expander::ShiftMap;
use shiftplanner::models::salary::MonthlySalary;
use shiftplanner::models::salary_rules::SalaryRules;
use shiftplanner::models::shift_type::ShiftType::{self, *};

mod common;
use common::{approx, d};

/// March 2025: the first 20 weekdays worked as day shifts, all 10 weekend days off.
fn march_2025() -> ShiftMap {
    let mut map = ShiftMap::new();
    let mut worked = 0;
    for day in d("2025-03-01").iter_to(d("2025-03-31")) {
        if day.is_weekend() {
            map.insert(day, Off);
        } else if worked < 20 {
            map.insert(day, Day);
            worked += 1;
        }
    }
    map
}

#[test]
fn test_weekend_night_allowances_stack() {
    let rules = SalaryRules {
        weekend_allowance_rate: 0.3,
        ..SalaryRules::default()
    };

    // 2024-01-06 is a Saturday
    let s = calculate_daily_salary(d("2024-01-06"), Night, &rules);

    assert!(approx(s.base_pay, 80000.0));
    assert!(approx(s.night_allowance, 40000.0));
    assert!(approx(s.weekend_allowance, 24000.0));
    assert!(approx(s.holiday_allowance, 0.0));
    assert!(approx(s.total_pay, 144000.0));
}

#[test]
fn test_weekday_day_shift_has_no_allowance() {
    let s = calculate_daily_salary(d("2024-01-02"), Day, &SalaryRules::default());
    assert!(approx(s.base_pay, 80000.0));
    assert!(approx(s.night_allowance, 0.0));
    assert!(approx(s.weekend_allowance, 0.0));
    assert!(approx(s.total_pay, 80000.0));
}

#[test]
fn test_evening_on_sunday_gets_weekend_only() {
    let s = calculate_daily_salary(d("2024-01-07"), Evening, &SalaryRules::default());
    assert!(approx(s.night_allowance, 0.0));
    assert!(approx(s.weekend_allowance, 40000.0));
    assert!(approx(s.total_pay, 120000.0));
}

#[test]
fn test_off_day_earns_nothing_even_on_weekend() {
    let rules = SalaryRules::default();
    for date in ["2024-01-06", "2024-01-08"] {
        let s = calculate_daily_salary(d(date), Off, &rules);
        assert_eq!(s.shift_type, ShiftType::Off);
        assert!(approx(s.base_pay, 0.0));
        assert!(approx(s.night_allowance, 0.0));
        assert!(approx(s.weekend_allowance, 0.0));
        assert!(approx(s.total_pay, 0.0));
    }
}

#[test]
fn test_custom_hours_drive_base_pay() {
    let rules = SalaryRules {
        hourly_wage: 12000.0,
        night_shift_hours: 10.0,
        ..SalaryRules::default()
    };
    let s = calculate_daily_salary(d("2024-01-03"), Night, &rules);
    assert!(approx(s.base_pay, 120000.0));
    assert!(approx(s.night_allowance, 60000.0));
}

#[test]
fn test_monthly_twenty_day_shifts() {
    let m = calculate_monthly_salary(&march_2025(), &SalaryRules::default(), 2025, 3);

    assert_eq!(m.base_pay, 1_600_000);
    assert_eq!(m.weekly_holiday_pay, 1_280_000);
    assert_eq!(m.total_pay, 2_880_000);
    assert_eq!(m.night_allowance, 0);
    assert_eq!(m.weekend_allowance, 0);
    assert_eq!(m.holiday_allowance, 0);
    assert_eq!(m.work_days, 20);
    assert_eq!(m.day_shift_count, 20);
    assert_eq!(m.night_shift_count, 0);
    assert_eq!(m.evening_shift_count, 0);
    assert_eq!(m.off_days, 10);
}

#[test]
fn test_monthly_ignores_other_months() {
    let mut map = march_2025();
    map.insert(d("2025-02-28"), Night);
    map.insert(d("2025-04-01"), Night);

    let m = calculate_monthly_salary(&map, &SalaryRules::default(), 2025, 3);
    assert_eq!(m.total_pay, 2_880_000);
    assert_eq!(m.night_shift_count, 0);
}

#[test]
fn test_empty_month_is_all_zero() {
    let m = calculate_monthly_salary(&march_2025(), &SalaryRules::default(), 2025, 5);
    assert_eq!(m, MonthlySalary::default());
    assert!(daily_breakdown(&march_2025(), &SalaryRules::default(), 2025, 5).is_empty());
}

#[test]
fn test_month_of_only_off_days_has_no_weekly_pay() {
    let mut map = ShiftMap::new();
    map.insert(d("2025-03-03"), Off);
    map.insert(d("2025-03-04"), Off);

    let m = calculate_monthly_salary(&map, &SalaryRules::default(), 2025, 3);
    assert_eq!(m.off_days, 2);
    assert_eq!(m.work_days, 0);
    assert_eq!(m.weekly_holiday_pay, 0);
    assert_eq!(m.total_pay, 0);
}

#[test]
fn test_weekly_holiday_pay_disabled() {
    let rules = SalaryRules {
        weekly_holiday_pay_enabled: false,
        ..SalaryRules::default()
    };
    let m = calculate_monthly_salary(&march_2025(), &rules, 2025, 3);
    assert_eq!(m.weekly_holiday_pay, 0);
    assert_eq!(m.total_pay, 1_600_000);
}

#[test]
fn test_zero_weekly_work_days_skips_weekly_pay() {
    let rules = SalaryRules {
        weekly_work_days: 0,
        ..SalaryRules::default()
    };
    let m = calculate_monthly_salary(&march_2025(), &rules, 2025, 3);
    assert_eq!(m.weekly_holiday_pay, 0);
    assert_eq!(m.total_pay, 1_600_000);
}

#[test]
fn test_weekly_holiday_pay_rounds_weeks_up() {
    // 6 day shifts = 48h; 48 / 5 × 10000 × ceil(6 / 5)
    let pay = weekly_holiday_pay(&SalaryRules::default(), 6, 6, 0, 0);
    assert!(approx(pay, 192000.0), "{pay}");
}

#[test]
fn test_monthly_total_is_rounded_once() {
    let rules = SalaryRules {
        hourly_wage: 1000.5,
        day_shift_hours: 1.0,
        weekly_holiday_pay_enabled: false,
        ..SalaryRules::default()
    };
    let mut map = ShiftMap::new();
    map.insert(d("2024-01-02"), Day);
    map.insert(d("2024-01-03"), Day);

    // per-day rounding would give 1001 + 1001
    let m = calculate_monthly_salary(&map, &rules, 2024, 1);
    assert_eq!(m.total_pay, 2001);
    assert_eq!(m.base_pay, 2001);
}

#[test]
fn test_daily_breakdown_is_date_ordered() {
    let mut map = ShiftMap::new();
    map.insert(d("2024-01-20"), Night);
    map.insert(d("2024-01-03"), Day);
    map.insert(d("2024-01-11"), Off);

    let days: Vec<String> = daily_breakdown(&map, &SalaryRules::default(), 2024, 1)
        .iter()
        .map(|s| s.date.to_string())
        .collect();
    assert_eq!(days, vec!["2024-01-03", "2024-01-11", "2024-01-20"]);
}
