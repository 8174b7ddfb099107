use crate::core::calculator::daily::calculate_daily_salary;
use crate::core::expander::ShiftMap;
use crate::models::salary::{DailySalary, MonthlySalary};
use crate::models::salary_rules::SalaryRules;
use crate::models::shift_type::ShiftType;

/// Unrounded running sums for one month.
#[derive(Debug, Default)]
struct Totals {
    total_pay: f64,
    base_pay: f64,
    night_allowance: f64,
    weekend_allowance: f64,
    holiday_allowance: f64,
    work_days: u32,
    off_days: u32,
    day_count: u32,
    night_count: u32,
    evening_count: u32,
}

impl Totals {
    fn add(&mut self, daily: &DailySalary) {
        self.total_pay += daily.total_pay;
        self.base_pay += daily.base_pay;
        self.night_allowance += daily.night_allowance;
        self.weekend_allowance += daily.weekend_allowance;
        self.holiday_allowance += daily.holiday_allowance;

        match daily.shift_type {
            ShiftType::Day => self.day_count += 1,
            ShiftType::Night => self.night_count += 1,
            ShiftType::Evening => self.evening_count += 1,
            ShiftType::Off => self.off_days += 1,
        }
        if daily.shift_type.is_work() {
            self.work_days += 1;
        }
    }
}

/// Daily pay for every assigned day of `year`-`month`, in date order.
pub fn daily_breakdown(
    shifts: &ShiftMap,
    rules: &SalaryRules,
    year: i32,
    month: u32,
) -> Vec<DailySalary> {
    shifts
        .iter()
        .filter(|(date, _)| date.in_month(year, month))
        .map(|(date, shift)| calculate_daily_salary(*date, *shift, rules))
        .collect()
}

/// Weekly holiday pay accrued over a month of work.
///
/// `(total hours / weekly work days) × wage × ceil(work days / weekly work days)`.
/// Zero when disabled, when nothing was worked or when no weekly work days
/// are configured.
pub fn weekly_holiday_pay(
    rules: &SalaryRules,
    work_days: u32,
    day_count: u32,
    night_count: u32,
    evening_count: u32,
) -> f64 {
    if !rules.weekly_holiday_pay_enabled || work_days == 0 || rules.weekly_work_days == 0 {
        return 0.0;
    }

    let weekly_days = rules.weekly_work_days as f64;
    let total_work_hours = day_count as f64 * rules.day_shift_hours
        + night_count as f64 * rules.night_shift_hours
        + evening_count as f64 * rules.evening_shift_hours;
    let weeks_in_month = (work_days as f64 / weekly_days).ceil();

    (total_work_hours / weekly_days) * rules.hourly_wage * weeks_in_month
}

/// Monthly aggregate. Sums are accumulated unrounded and rounded once here,
/// so they may differ slightly from adding up rounded daily figures.
pub fn calculate_monthly_salary(
    shifts: &ShiftMap,
    rules: &SalaryRules,
    year: i32,
    month: u32,
) -> MonthlySalary {
    let mut t = Totals::default();
    for daily in daily_breakdown(shifts, rules, year, month) {
        t.add(&daily);
    }

    let weekly = weekly_holiday_pay(
        rules,
        t.work_days,
        t.day_count,
        t.night_count,
        t.evening_count,
    );
    t.total_pay += weekly;

    MonthlySalary {
        total_pay: round_money(t.total_pay),
        base_pay: round_money(t.base_pay),
        night_allowance: round_money(t.night_allowance),
        weekend_allowance: round_money(t.weekend_allowance),
        holiday_allowance: round_money(t.holiday_allowance),
        weekly_holiday_pay: round_money(weekly),
        work_days: t.work_days,
        day_shift_count: t.day_count,
        night_shift_count: t.night_count,
        evening_shift_count: t.evening_count,
        off_days: t.off_days,
    }
}

fn round_money(v: f64) -> i64 {
    v.round() as i64
}
