//! Period parsing for `list`, `salary` and `export`.
//!
//! Supported forms:
//! - `YYYY-MM-DD` (single day)
//! - `YYYY-MM`    (whole month)
//! - `YYYY`       (whole year)
//! - `A:B` with A and B in any of the forms above

use crate::errors::{AppError, AppResult};
use crate::models::shift_date::ShiftDate;

pub fn today() -> ShiftDate {
    ShiftDate::today()
}

/// Parse `YYYY-MM` into (year, month).
pub fn parse_month(s: &str) -> AppResult<(i32, u32)> {
    let invalid = || AppError::InvalidDate(format!("{s} (expected YYYY-MM)"));

    let (y, m) = s.split_once('-').ok_or_else(invalid)?;
    if y.len() != 4 || m.len() != 2 {
        return Err(invalid());
    }

    let year: i32 = y.parse().map_err(|_| invalid())?;
    let month: u32 = m.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }

    Ok((year, month))
}

/// Month to use when none is given on the command line.
pub fn current_month() -> (i32, u32) {
    let t = today();
    (t.year(), t.month())
}

pub fn month_range(year: i32, month: u32) -> AppResult<(ShiftDate, ShiftDate)> {
    let start = ShiftDate::first_of_month(year, month)
        .ok_or_else(|| AppError::InvalidDate(format!("{year}-{month:02}")))?;
    let end = ShiftDate::last_of_month(year, month)
        .ok_or_else(|| AppError::InvalidDate(format!("{year}-{month:02}")))?;
    Ok((start, end))
}

/// First and last day covered by a single period expression.
pub fn generate_from_period(p: &str) -> AppResult<(ShiftDate, ShiftDate)> {
    let p = p.trim();

    match p.len() {
        // YYYY-MM-DD
        10 => {
            let d = ShiftDate::parse(p)?;
            Ok((d, d))
        }
        // YYYY-MM
        7 => {
            let (y, m) = parse_month(p)?;
            month_range(y, m)
        }
        // YYYY
        4 => {
            let year: i32 = p
                .parse()
                .map_err(|_| AppError::InvalidDate(format!("Invalid period: {p}")))?;
            let start = ShiftDate::from_ymd(year, 1, 1)
                .ok_or_else(|| AppError::InvalidDate(format!("Invalid period: {p}")))?;
            let end = ShiftDate::from_ymd(year, 12, 31)
                .ok_or_else(|| AppError::InvalidDate(format!("Invalid period: {p}")))?;
            Ok((start, end))
        }
        _ => Err(AppError::InvalidDate(format!("Invalid period: {p}"))),
    }
}

/// Resolve a period or an `A:B` range to inclusive bounds.
pub fn resolve_period(p: &str) -> AppResult<(ShiftDate, ShiftDate)> {
    if let Some((a, b)) = p.split_once(':') {
        let (start, _) = generate_from_period(a)?;
        let (_, end) = generate_from_period(b)?;

        if end < start {
            return Err(AppError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        return Ok((start, end));
    }

    generate_from_period(p)
}
