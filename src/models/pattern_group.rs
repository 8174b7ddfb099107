use super::{shift_date::ShiftDate, shift_type::ShiftType};
use chrono::Local;
use serde::{Deserialize, Serialize};

/// One applied repeating schedule.
///
/// The stored bounds describe where the pattern was applied, not which days
/// still carry its values: later patterns and manual edits may overwrite them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternGroup {
    pub id: String,
    pub pattern: Vec<ShiftType>,
    pub start_date: ShiftDate, // inclusive
    pub end_date: ShiftDate,   // inclusive
    pub created_at: i64,       // epoch millis, informational only
}

impl PatternGroup {
    /// Build a group with a fresh v4 id stamped with the current time.
    pub fn new(pattern: Vec<ShiftType>, start_date: ShiftDate, end_date: ShiftDate) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            pattern,
            start_date,
            end_date,
            created_at: Local::now().timestamp_millis(),
        }
    }

    pub fn contains(&self, date: &ShiftDate) -> bool {
        *date >= self.start_date && *date <= self.end_date
    }

    /// First 8 characters of the id, enough to address a group from the CLI.
    pub fn short_id(&self) -> &str {
        let end = self
            .id
            .char_indices()
            .nth(8)
            .map(|(i, _)| i)
            .unwrap_or(self.id.len());
        &self.id[..end]
    }

    pub fn pattern_label(&self) -> String {
        self.pattern
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}
