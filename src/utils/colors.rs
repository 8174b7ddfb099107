/// ANSI color helper utilities for terminal output.
use crate::models::shift_type::ShiftType;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

/// Day → yellow, evening → magenta, night → blue, off → grey.
pub fn color_for_shift(shift: Option<ShiftType>) -> &'static str {
    match shift {
        Some(ShiftType::Day) => YELLOW,
        Some(ShiftType::Evening) => MAGENTA,
        Some(ShiftType::Night) => BLUE,
        Some(ShiftType::Off) | None => GREY,
    }
}

/// Weekend dates are printed in red.
pub fn color_for_weekday(is_weekend: bool) -> &'static str {
    if is_weekend { RED } else { RESET }
}

/// Grey for empty placeholders ("", "--"), plain otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn paint(color: &str, value: &str) -> String {
    format!("{color}{value}{RESET}")
}
