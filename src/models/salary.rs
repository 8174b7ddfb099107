use super::{shift_date::ShiftDate, shift_type::ShiftType};
use serde::Serialize;

/// Pay for one day. Values are unrounded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySalary {
    pub date: ShiftDate,
    pub shift_type: ShiftType,
    pub base_pay: f64,
    pub night_allowance: f64,
    pub weekend_allowance: f64,
    pub holiday_allowance: f64, // no holiday calendar yet: always 0
    pub total_pay: f64,
}

/// Aggregated pay for a month. Money is rounded once, after accumulation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySalary {
    pub total_pay: i64,
    pub base_pay: i64,
    pub night_allowance: i64,
    pub weekend_allowance: i64,
    pub holiday_allowance: i64,
    pub weekly_holiday_pay: i64,
    pub work_days: u32,
    pub day_shift_count: u32,
    pub night_shift_count: u32,
    pub evening_shift_count: u32,
    pub off_days: u32,
}
