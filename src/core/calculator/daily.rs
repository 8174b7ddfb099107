use crate::models::salary::DailySalary;
use crate::models::salary_rules::SalaryRules;
use crate::models::shift_date::ShiftDate;
use crate::models::shift_type::ShiftType;

/// Pay for a single day.
///
/// Night and weekend allowances stack: a weekend night shift gets both.
/// `off` days earn nothing, whatever the weekday.
pub fn calculate_daily_salary(
    date: ShiftDate,
    shift_type: ShiftType,
    rules: &SalaryRules,
) -> DailySalary {
    let base_pay = match shift_type {
        ShiftType::Off => 0.0,
        work => rules.hourly_wage * rules.hours_for(work),
    };

    let night_allowance = if shift_type == ShiftType::Night {
        base_pay * rules.night_allowance_rate
    } else {
        0.0
    };

    let weekend_allowance = if shift_type.is_work() && date.is_weekend() {
        base_pay * rules.weekend_allowance_rate
    } else {
        0.0
    };

    let holiday_allowance = 0.0;

    DailySalary {
        date,
        shift_type,
        base_pay,
        night_allowance,
        weekend_allowance,
        holiday_allowance,
        total_pay: base_pay + night_allowance + weekend_allowance + holiday_allowance,
    }
}
