use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of shift kinds a calendar day can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftType {
    Day,
    Night,
    Evening,
    Off,
}

impl ShiftType {
    /// Convert enum → storage string
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftType::Day => "day",
            ShiftType::Night => "night",
            ShiftType::Evening => "evening",
            ShiftType::Off => "off",
        }
    }

    pub fn is_work(&self) -> bool {
        !matches!(self, ShiftType::Off)
    }

    /// Parse a comma separated sequence such as `day,day,night,off`.
    ///
    /// Every token must name a shift: `day,,off` is rejected.
    pub fn parse_sequence(s: &str) -> Result<Vec<ShiftType>, AppError> {
        s.split(',')
            .map(|part| match part.trim() {
                "" => Err(AppError::InvalidShiftType(format!("empty entry in '{s}'"))),
                token => ShiftType::from_str(token),
            })
            .collect()
    }
}

impl FromStr for ShiftType {
    type Err = AppError;

    /// Helper: accepts lowercase or uppercase input from the CLI.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(ShiftType::Day),
            "night" => Ok(ShiftType::Night),
            "evening" => Ok(ShiftType::Evening),
            "off" => Ok(ShiftType::Off),
            _ => Err(AppError::InvalidShiftType(s.to_string())),
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
