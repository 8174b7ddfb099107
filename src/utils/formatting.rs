//! Formatting utilities used for CLI and export outputs.

use crate::models::shift_type::ShiftType;

/// Whole units with thousands separators: `2880000` → `2,880,000`.
pub fn format_money(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if amount < 0 {
        out.insert(0, '-');
    }
    out
}

/// Human label for a shift, `--` when the day has none.
pub fn describe_shift(shift: Option<ShiftType>) -> String {
    match shift {
        Some(ShiftType::Day) => "Day".into(),
        Some(ShiftType::Night) => "Night".into(),
        Some(ShiftType::Evening) => "Evening".into(),
        Some(ShiftType::Off) => "Off".into(),
        None => "--".into(),
    }
}

/// Cut `s` to `max` characters, ending with `…` when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    let first_line = s.lines().next().unwrap_or("");
    if first_line.chars().count() <= max && !s.contains('\n') {
        return first_line.to_string();
    }
    let mut out: String = first_line.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Remove ANSI color sequences, e.g. to measure visible width.
pub fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ANSI pattern");
    re.replace_all(s, "").into_owned()
}
