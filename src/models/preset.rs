use super::{shift_date::ShiftDate, shift_type::ShiftType};
use crate::errors::{AppError, AppResult};
use clap::ValueEnum;

/// Built-in rotation schedules offered by `pattern apply --preset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PatternPreset {
    /// day, off
    Pongdang,
    /// day, evening, night, off
    ThreeShift,
    /// day, day, night, night, off, off
    TwoTwo,
}

impl PatternPreset {
    pub fn pattern(&self) -> Vec<ShiftType> {
        use ShiftType::*;
        match self {
            PatternPreset::Pongdang => vec![Day, Off],
            PatternPreset::ThreeShift => vec![Day, Evening, Night, Off],
            PatternPreset::TwoTwo => vec![Day, Day, Night, Night, Off, Off],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PatternPreset::Pongdang => "pongdang",
            PatternPreset::ThreeShift => "three-shift",
            PatternPreset::TwoTwo => "two-two",
        }
    }
}

/// How the date range of a new pattern is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RangePreset {
    /// From today for the configured number of months
    Today,
    /// First to last day of the current month
    Month,
    /// Explicit --from/--to
    Custom,
}

impl RangePreset {
    /// Resolve to inclusive bounds relative to `today`.
    pub fn resolve(
        &self,
        today: ShiftDate,
        horizon_months: u32,
        from: Option<ShiftDate>,
        to: Option<ShiftDate>,
    ) -> AppResult<(ShiftDate, ShiftDate)> {
        match self {
            RangePreset::Today => {
                let end = today.add_months(horizon_months).ok_or_else(|| {
                    AppError::InvalidDate(format!("{today} + {horizon_months} months"))
                })?;
                Ok((today, end))
            }
            RangePreset::Month => {
                let (y, m) = (today.year(), today.month());
                let start = ShiftDate::first_of_month(y, m)
                    .ok_or_else(|| AppError::InvalidDate(today.to_string()))?;
                let end = ShiftDate::last_of_month(y, m)
                    .ok_or_else(|| AppError::InvalidDate(today.to_string()))?;
                Ok((start, end))
            }
            RangePreset::Custom => match (from, to) {
                (Some(s), Some(e)) => Ok((s, e)),
                _ => Err(AppError::InvalidDate(
                    "a custom range needs both --from and --to".into(),
                )),
            },
        }
    }
}
