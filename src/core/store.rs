//! Persistence port used by the planner.
//!
//! Each store is a JSON document saved under a fixed name. Implementations
//! only move text around; decoding happens in [`crate::core::planner`].

use crate::errors::AppResult;
use std::collections::HashMap;
use std::fmt;

/// Fixed storage names, one per persisted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreName {
    Shifts,
    Diary,
    Salary,
}

impl StoreName {
    pub fn key(&self) -> &'static str {
        match self {
            StoreName::Shifts => "shift-storage",
            StoreName::Diary => "diary-salary-storage",
            StoreName::Salary => "salary-storage",
        }
    }
}

impl fmt::Display for StoreName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

pub trait StateStore {
    /// `Ok(None)` when nothing was ever saved under `name` (first run).
    fn load(&mut self, name: StoreName) -> AppResult<Option<String>>;

    fn save(&mut self, name: StoreName, json: &str) -> AppResult<()>;
}

/// In-process store, handy for tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    docs: HashMap<StoreName, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: StoreName) -> Option<&str> {
        self.docs.get(&name).map(String::as_str)
    }

    pub fn insert(&mut self, name: StoreName, json: impl Into<String>) {
        self.docs.insert(name, json.into());
    }
}

impl StateStore for MemoryStore {
    fn load(&mut self, name: StoreName) -> AppResult<Option<String>> {
        Ok(self.docs.get(&name).cloned())
    }

    fn save(&mut self, name: StoreName, json: &str) -> AppResult<()> {
        self.docs.insert(name, json.to_string());
        Ok(())
    }
}
