use super::shift_date::ShiftDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Free-text notes keyed by day. Independent of the shift map: clearing or
/// re-patterning shifts never touches it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diary {
    pub diaries: BTreeMap<ShiftDate, String>,
}

impl Diary {
    pub fn get(&self, date: &ShiftDate) -> Option<&str> {
        self.diaries.get(date).map(String::as_str)
    }

    /// Store `content` for `date`, replacing any previous entry.
    pub fn set(&mut self, date: ShiftDate, content: impl Into<String>) {
        self.diaries.insert(date, content.into());
    }

    pub fn remove(&mut self, date: &ShiftDate) -> Option<String> {
        self.diaries.remove(date)
    }

    pub fn len(&self) -> usize {
        self.diaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diaries.is_empty()
    }
}
