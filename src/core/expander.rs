//! Expansion of a repeating shift sequence over an inclusive date range.

use crate::errors::{AppError, AppResult};
use crate::models::shift_date::ShiftDate;
use crate::models::shift_type::ShiftType;
use std::collections::BTreeMap;

/// Authoritative per-day assignment: one shift per calendar day.
pub type ShiftMap = BTreeMap<ShiftDate, ShiftType>;

/// Check the inputs of [`expand`] without producing the map.
pub fn validate(start: ShiftDate, end: ShiftDate, pattern: &[ShiftType]) -> AppResult<()> {
    if pattern.is_empty() {
        return Err(AppError::InvalidPattern(
            "the repeating sequence is empty".into(),
        ));
    }

    if end < start {
        return Err(AppError::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    Ok(())
}

/// Assign `pattern[i % len]` to the day at offset `i` from `start`, for every
/// day up to and including `end`.
///
/// Same inputs always give the same map, which is what lets a pattern group be
/// regenerated after its dates are edited.
pub fn expand(start: ShiftDate, end: ShiftDate, pattern: &[ShiftType]) -> AppResult<ShiftMap> {
    validate(start, end, pattern)?;

    let shifts = start
        .iter_to(end)
        .zip(pattern.iter().cycle())
        .map(|(date, shift)| (date, *shift))
        .collect();

    Ok(shifts)
}
