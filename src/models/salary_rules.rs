use super::shift_type::ShiftType;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// User-configurable pay rules.
///
/// Rates are fractions of base pay (`0.5` = 50%). Percent text coming from the
/// CLI is converted before it reaches this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SalaryRules {
    pub hourly_wage: f64,

    pub day_shift_hours: f64,
    pub night_shift_hours: f64,
    pub evening_shift_hours: f64,

    pub night_allowance_rate: f64,
    pub weekend_allowance_rate: f64,
    pub holiday_allowance_rate: f64,
    /// Stored for completeness; no calculation reads it yet.
    pub overtime_allowance_rate: f64,

    pub weekly_holiday_pay_enabled: bool,
    pub weekly_work_days: u32,
}

impl Default for SalaryRules {
    fn default() -> Self {
        Self {
            hourly_wage: 10000.0,
            day_shift_hours: 8.0,
            night_shift_hours: 8.0,
            evening_shift_hours: 8.0,
            night_allowance_rate: 0.5,
            weekend_allowance_rate: 0.5,
            holiday_allowance_rate: 1.5,
            overtime_allowance_rate: 0.5,
            weekly_holiday_pay_enabled: true,
            weekly_work_days: 5,
        }
    }
}

impl SalaryRules {
    /// Paid hours for a shift; `off` is always zero.
    pub fn hours_for(&self, shift: ShiftType) -> f64 {
        match shift {
            ShiftType::Day => self.day_shift_hours,
            ShiftType::Night => self.night_shift_hours,
            ShiftType::Evening => self.evening_shift_hours,
            ShiftType::Off => 0.0,
        }
    }

    /// Every numeric field must be finite and non-negative.
    pub fn validate(&self) -> AppResult<()> {
        let fields = [
            ("hourlyWage", self.hourly_wage),
            ("dayShiftHours", self.day_shift_hours),
            ("nightShiftHours", self.night_shift_hours),
            ("eveningShiftHours", self.evening_shift_hours),
            ("nightAllowanceRate", self.night_allowance_rate),
            ("weekendAllowanceRate", self.weekend_allowance_rate),
            ("holidayAllowanceRate", self.holiday_allowance_rate),
            ("overtimeAllowanceRate", self.overtime_allowance_rate),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::InvalidRules(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        Ok(())
    }
}
