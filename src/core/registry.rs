//! Owner of the shift map and of the pattern groups that fed it.

use crate::core::expander::{self, ShiftMap};
use crate::errors::{AppError, AppResult};
use crate::models::pattern_group::PatternGroup;
use crate::models::shift_date::ShiftDate;
use crate::models::shift_type::ShiftType;
use serde::{Deserialize, Serialize};

/// Shift map plus the ordered list of applied pattern groups.
///
/// Overlapping groups are allowed. Expansion is last-write-wins, while
/// [`ShiftRegistry::find_pattern_group_for_date`] is first-match, so the group
/// it reports is not necessarily the one that produced a day's value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShiftRegistry {
    shifts: ShiftMap,
    pattern_groups: Vec<PatternGroup>,
}

impl ShiftRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shifts(&self) -> &ShiftMap {
        &self.shifts
    }

    pub fn pattern_groups(&self) -> &[PatternGroup] {
        &self.pattern_groups
    }

    pub fn shift_on(&self, date: &ShiftDate) -> Option<ShiftType> {
        self.shifts.get(date).copied()
    }

    pub fn pattern_group(&self, id: &str) -> Option<&PatternGroup> {
        self.pattern_groups.iter().find(|g| g.id == id)
    }

    /// Entries of the given month, in date order.
    pub fn shifts_in_month(&self, year: i32, month: u32) -> ShiftMap {
        self.shifts
            .iter()
            .filter(|(d, _)| d.in_month(year, month))
            .map(|(d, s)| (*d, *s))
            .collect()
    }

    /// Overwrite one day. Pattern groups are left as they are.
    pub fn set_shift(&mut self, date: ShiftDate, shift: ShiftType) {
        self.shifts.insert(date, shift);
    }

    /// Record a new group and write its expansion over the map.
    pub fn add_pattern_group(
        &mut self,
        start: ShiftDate,
        end: ShiftDate,
        pattern: Vec<ShiftType>,
    ) -> AppResult<&PatternGroup> {
        let expanded = expander::expand(start, end, &pattern)?;

        self.shifts.extend(expanded);
        self.pattern_groups.push(PatternGroup::new(pattern, start, end));

        let idx = self.pattern_groups.len() - 1;
        Ok(&self.pattern_groups[idx])
    }

    /// Move a group to new bounds.
    ///
    /// Every day of the old range is cleared, then the unchanged pattern is
    /// expanded over the new range. An unknown id is a no-op and yields
    /// `Ok(None)`. Inputs are validated before anything is removed.
    pub fn update_pattern_group_dates(
        &mut self,
        id: &str,
        new_start: ShiftDate,
        new_end: ShiftDate,
    ) -> AppResult<Option<PatternGroup>> {
        let Some(idx) = self.pattern_groups.iter().position(|g| g.id == id) else {
            return Ok(None);
        };

        let (old_start, old_end, pattern) = {
            let g = &self.pattern_groups[idx];
            (g.start_date, g.end_date, g.pattern.clone())
        };

        let regenerated = expander::expand(new_start, new_end, &pattern)?;

        // 1) delete phase
        for date in old_start.iter_to(old_end) {
            self.shifts.remove(&date);
        }

        // 2) regenerate phase
        self.shifts.extend(regenerated);

        // 3) new bounds
        let group = &mut self.pattern_groups[idx];
        group.start_date = new_start;
        group.end_date = new_end;

        Ok(Some(group.clone()))
    }

    /// Check every stored group: non-empty pattern and `start <= end`.
    pub fn validate(&self) -> AppResult<()> {
        for g in &self.pattern_groups {
            expander::validate(g.start_date, g.end_date, &g.pattern).map_err(|e| {
                AppError::InvalidPattern(format!("group {}: {}", g.id, e))
            })?;
        }
        Ok(())
    }

    /// First group in storage order whose range contains `date`.
    pub fn find_pattern_group_for_date(&self, date: &ShiftDate) -> Option<&PatternGroup> {
        self.pattern_groups.iter().find(|g| g.contains(date))
    }

    /// Drop every shift and every pattern group.
    pub fn clear_shifts(&mut self) {
        self.shifts.clear();
        self.pattern_groups.clear();
    }
}
