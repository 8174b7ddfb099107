// src/export/model.rs

use crate::models::salary::{DailySalary, MonthlySalary};
use serde::Serialize;

/// Flat per-day row; CSV headers come from the field names.
#[derive(Serialize, Clone, Debug)]
pub struct DailyExportRow {
    pub date: String,
    pub weekday: String,
    pub shift: String,
    pub base_pay: f64,
    pub night_allowance: f64,
    pub weekend_allowance: f64,
    pub holiday_allowance: f64,
    pub total_pay: f64,
}

impl From<&DailySalary> for DailyExportRow {
    fn from(d: &DailySalary) -> Self {
        Self {
            date: d.date.to_string(),
            weekday: d.date.weekday().to_string(),
            shift: d.shift_type.as_str().to_string(),
            base_pay: d.base_pay,
            night_allowance: d.night_allowance,
            weekend_allowance: d.weekend_allowance,
            holiday_allowance: d.holiday_allowance,
            total_pay: d.total_pay,
        }
    }
}

/// JSON document: the month, its summary and the daily rows.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyExport {
    pub month: String,
    pub summary: MonthlySalary,
    pub days: Vec<DailyExportRow>,
}
