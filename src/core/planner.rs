//! Application state: shift registry, diary and salary rules, loaded from and
//! saved to an injected [`StateStore`].

use crate::core::calculator::{calculate_monthly_salary, daily_breakdown};
use crate::core::registry::ShiftRegistry;
use crate::core::store::{StateStore, StoreName};
use crate::errors::{AppError, AppResult};
use crate::models::diary::Diary;
use crate::models::pattern_group::PatternGroup;
use crate::models::salary::{DailySalary, MonthlySalary};
use crate::models::salary_rules::SalaryRules;
use crate::models::shift_date::ShiftDate;
use crate::models::shift_type::ShiftType;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Shape of the `salary-storage` document.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SalaryDocument {
    settings: SalaryRules,
}

pub struct Planner<S: StateStore> {
    store: S,
    registry: ShiftRegistry,
    diary: Diary,
    rules: SalaryRules,
}

impl<S: StateStore> Planner<S> {
    /// Load every store; missing documents fall back to defaults, unreadable
    /// ones and ones breaking a pattern group or rules invariant fail with
    /// [`AppError::CorruptState`].
    pub fn load(mut store: S) -> AppResult<Self> {
        let registry: ShiftRegistry = load_doc(&mut store, StoreName::Shifts)?.unwrap_or_default();
        let diary: Diary = load_doc(&mut store, StoreName::Diary)?.unwrap_or_default();
        let rules = load_doc::<SalaryDocument, _>(&mut store, StoreName::Salary)?
            .map(|doc| doc.settings)
            .unwrap_or_default();

        registry.validate().map_err(|e| AppError::CorruptState {
            store: StoreName::Shifts.to_string(),
            reason: e.to_string(),
        })?;

        rules.validate().map_err(|e| AppError::CorruptState {
            store: StoreName::Salary.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            store,
            registry,
            diary,
            rules,
        })
    }

    pub fn registry(&self) -> &ShiftRegistry {
        &self.registry
    }

    pub fn diary(&self) -> &Diary {
        &self.diary
    }

    pub fn rules(&self) -> &SalaryRules {
        &self.rules
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // ---------------------------
    // Shifts
    // ---------------------------

    pub fn set_shift(&mut self, date: ShiftDate, shift: ShiftType) -> AppResult<()> {
        self.registry.set_shift(date, shift);
        self.save_shifts()
    }

    pub fn add_pattern_group(
        &mut self,
        start: ShiftDate,
        end: ShiftDate,
        pattern: Vec<ShiftType>,
    ) -> AppResult<PatternGroup> {
        let group = self.registry.add_pattern_group(start, end, pattern)?.clone();
        self.save_shifts()?;
        Ok(group)
    }

    /// `Ok(None)` for an unknown id; nothing is saved in that case.
    pub fn update_pattern_group_dates(
        &mut self,
        id: &str,
        new_start: ShiftDate,
        new_end: ShiftDate,
    ) -> AppResult<Option<PatternGroup>> {
        let updated = self
            .registry
            .update_pattern_group_dates(id, new_start, new_end)?;
        if updated.is_some() {
            self.save_shifts()?;
        }
        Ok(updated)
    }

    pub fn find_pattern_group_for_date(&self, date: &ShiftDate) -> Option<&PatternGroup> {
        self.registry.find_pattern_group_for_date(date)
    }

    /// Resolve a full id or a unique id prefix (as printed by `pattern list`).
    pub fn resolve_group_id(&self, id_or_prefix: &str) -> AppResult<String> {
        if let Some(g) = self.registry.pattern_group(id_or_prefix) {
            return Ok(g.id.clone());
        }

        let matches: Vec<&PatternGroup> = self
            .registry
            .pattern_groups()
            .iter()
            .filter(|g| g.id.starts_with(id_or_prefix))
            .collect();

        match matches.as_slice() {
            [only] => Ok(only.id.clone()),
            [] => Err(AppError::NotFound(format!("pattern group '{id_or_prefix}'"))),
            _ => Err(AppError::NotFound(format!(
                "pattern group prefix '{id_or_prefix}' is ambiguous ({} matches)",
                matches.len()
            ))),
        }
    }

    /// Empty the shift map and the group list. The diary is kept.
    pub fn clear_shifts(&mut self) -> AppResult<()> {
        self.registry.clear_shifts();
        self.save_shifts()
    }

    // ---------------------------
    // Diary
    // ---------------------------

    pub fn set_diary(&mut self, date: ShiftDate, content: impl Into<String>) -> AppResult<()> {
        self.diary.set(date, content);
        self.save_diary()
    }

    pub fn remove_diary(&mut self, date: &ShiftDate) -> AppResult<Option<String>> {
        let removed = self.diary.remove(date);
        if removed.is_some() {
            self.save_diary()?;
        }
        Ok(removed)
    }

    // ---------------------------
    // Salary
    // ---------------------------

    pub fn update_rules(&mut self, rules: SalaryRules) -> AppResult<()> {
        rules.validate()?;
        self.rules = rules;
        self.save_rules()
    }

    pub fn reset_rules(&mut self) -> AppResult<()> {
        self.rules = SalaryRules::default();
        self.save_rules()
    }

    pub fn monthly_salary(&self, year: i32, month: u32) -> MonthlySalary {
        calculate_monthly_salary(self.registry.shifts(), &self.rules, year, month)
    }

    pub fn daily_salaries(&self, year: i32, month: u32) -> Vec<DailySalary> {
        daily_breakdown(self.registry.shifts(), &self.rules, year, month)
    }

    // ---------------------------
    // Persistence
    // ---------------------------

    fn save_shifts(&mut self) -> AppResult<()> {
        let json = serde_json::to_string(&self.registry)?;
        self.store.save(StoreName::Shifts, &json)
    }

    fn save_diary(&mut self) -> AppResult<()> {
        let json = serde_json::to_string(&self.diary)?;
        self.store.save(StoreName::Diary, &json)
    }

    fn save_rules(&mut self) -> AppResult<()> {
        let doc = SalaryDocument {
            settings: self.rules.clone(),
        };
        let json = serde_json::to_string(&doc)?;
        self.store.save(StoreName::Salary, &json)
    }
}

fn load_doc<T: DeserializeOwned, S: StateStore>(
    store: &mut S,
    name: StoreName,
) -> AppResult<Option<T>> {
    let Some(raw) = store.load(name)? else {
        return Ok(None);
    };

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| AppError::CorruptState {
            store: name.to_string(),
            reason: e.to_string(),
        })
}
