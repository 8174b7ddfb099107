use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Months, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const DATE_FMT: &str = "%Y-%m-%d";

/// A whole calendar day, without time or timezone.
///
/// In memory it is a `NaiveDate`, so ordering is chronological. On the wire
/// and in storage it is always the canonical `YYYY-MM-DD` string, which sorts
/// the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShiftDate(NaiveDate);

impl ShiftDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Strict parser: only the canonical zero-padded form is accepted.
    pub fn parse(s: &str) -> AppResult<Self> {
        let d = NaiveDate::parse_from_str(s, DATE_FMT)
            .map_err(|_| AppError::InvalidDate(s.to_string()))?;

        // reject "2024-1-5" and friends
        if d.format(DATE_FMT).to_string() != s {
            return Err(AppError::InvalidDate(s.to_string()));
        }

        Ok(Self(d))
    }

    pub fn today() -> Self {
        Self(chrono::Local::now().date_naive())
    }

    pub fn first_of_month(year: i32, month: u32) -> Option<Self> {
        Self::from_ymd(year, month, 1)
    }

    pub fn last_of_month(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next = first.checked_add_months(Months::new(1))?;
        next.pred_opt().map(Self)
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Saturday or Sunday on the naive calendar.
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// `YYYY-MM` prefix of the canonical form.
    pub fn year_month(&self) -> String {
        self.0.format("%Y-%m").to_string()
    }

    pub fn in_month(&self, year: i32, month: u32) -> bool {
        self.year_month() == month_key(year, month)
    }

    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    pub fn add_months(&self, months: u32) -> Option<Self> {
        self.0.checked_add_months(Months::new(months)).map(Self)
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: &ShiftDate) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Every day from `self` to `end`, both included. Empty when `end < self`.
    pub fn iter_to(&self, end: ShiftDate) -> DayIter {
        DayIter {
            next: Some(*self),
            end,
        }
    }
}

/// `YYYY-MM` key for a year/month pair.
pub fn month_key(year: i32, month: u32) -> String {
    format!("{:04}-{:02}", year, month)
}

/// Inclusive day iterator returned by [`ShiftDate::iter_to`].
pub struct DayIter {
    next: Option<ShiftDate>,
    end: ShiftDate,
}

impl Iterator for DayIter {
    type Item = ShiftDate;

    fn next(&mut self) -> Option<ShiftDate> {
        let current = self.next?;
        if current > self.end {
            self.next = None;
            return None;
        }
        self.next = current.succ();
        Some(current)
    }
}

impl fmt::Display for ShiftDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FMT))
    }
}

impl FromStr for ShiftDate {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShiftDate::parse(s)
    }
}

impl From<NaiveDate> for ShiftDate {
    fn from(d: NaiveDate) -> Self {
        Self(d)
    }
}

impl Serialize for ShiftDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ShiftDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ShiftDate::parse(&raw).map_err(serde::de::Error::custom)
    }
}
