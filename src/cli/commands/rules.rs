use crate::cli::commands::open_planner;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::errors::{AppError, AppResult};
use crate::models::salary_rules::SalaryRules;
use crate::ui::messages::{info, success};

/// Keys accepted by `rules --set`. Rate keys take percent values.
pub const RULE_KEYS: &[&str] = &[
    "hourly_wage",
    "day_hours",
    "night_hours",
    "evening_hours",
    "night_rate",
    "weekend_rate",
    "holiday_rate",
    "overtime_rate",
    "weekly_holiday_pay",
    "weekly_work_days",
];

fn parse_number(key: &str, raw: &str) -> AppResult<f64> {
    let v: f64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidRules(format!("{key}: '{raw}' is not a number")))?;
    if !v.is_finite() || v < 0.0 {
        return Err(AppError::InvalidRules(format!(
            "{key}: '{raw}' must be zero or positive"
        )));
    }
    Ok(v)
}

fn parse_percent(key: &str, raw: &str) -> AppResult<f64> {
    let trimmed = raw.trim().trim_end_matches('%');
    Ok(parse_number(key, trimmed)? / 100.0)
}

fn parse_bool(key: &str, raw: &str) -> AppResult<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(AppError::InvalidRules(format!(
            "{key}: '{raw}' is not a boolean"
        ))),
    }
}

/// Apply one `key=value` assignment to `rules`.
///
/// Percent text (`50` or `50%`) is turned into a fraction (`0.5`) here, so the
/// calculator only ever sees fractions.
pub fn apply_setting(rules: &mut SalaryRules, assignment: &str) -> AppResult<()> {
    let (key, raw) = assignment
        .split_once('=')
        .ok_or_else(|| AppError::InvalidRules(format!("'{assignment}' is not KEY=VALUE")))?;
    let key = key.trim();

    match key {
        "hourly_wage" => rules.hourly_wage = parse_number(key, raw)?,
        "day_hours" => rules.day_shift_hours = parse_number(key, raw)?,
        "night_hours" => rules.night_shift_hours = parse_number(key, raw)?,
        "evening_hours" => rules.evening_shift_hours = parse_number(key, raw)?,
        "night_rate" => rules.night_allowance_rate = parse_percent(key, raw)?,
        "weekend_rate" => rules.weekend_allowance_rate = parse_percent(key, raw)?,
        "holiday_rate" => rules.holiday_allowance_rate = parse_percent(key, raw)?,
        "overtime_rate" => rules.overtime_allowance_rate = parse_percent(key, raw)?,
        "weekly_holiday_pay" => rules.weekly_holiday_pay_enabled = parse_bool(key, raw)?,
        "weekly_work_days" => {
            rules.weekly_work_days = raw.trim().parse().map_err(|_| {
                AppError::InvalidRules(format!("{key}: '{raw}' is not a whole number"))
            })?
        }
        other => {
            return Err(AppError::InvalidRules(format!(
                "unknown key '{other}' (expected one of: {})",
                RULE_KEYS.join(", ")
            )));
        }
    }

    Ok(())
}

pub fn print_rules(rules: &SalaryRules) {
    println!("hourly_wage        = {}", rules.hourly_wage);
    println!("day_hours          = {}", rules.day_shift_hours);
    println!("night_hours        = {}", rules.night_shift_hours);
    println!("evening_hours      = {}", rules.evening_shift_hours);
    println!("night_rate         = {}%", rules.night_allowance_rate * 100.0);
    println!("weekend_rate       = {}%", rules.weekend_allowance_rate * 100.0);
    println!("holiday_rate       = {}%", rules.holiday_allowance_rate * 100.0);
    println!("overtime_rate      = {}%", rules.overtime_allowance_rate * 100.0);
    println!("weekly_holiday_pay = {}", rules.weekly_holiday_pay_enabled);
    println!("weekly_work_days   = {}", rules.weekly_work_days);
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rules { print, set, reset } = cmd {
        let mut planner = open_planner(cfg)?;

        if *reset {
            planner.reset_rules()?;
            success("Salary rules restored to defaults.");
            ttlog_soft(planner.store().conn(), "rules", "reset", "Defaults restored");
        }

        if !set.is_empty() {
            // all-or-nothing: nothing is saved if one assignment is invalid
            let mut rules = planner.rules().clone();
            for assignment in set {
                apply_setting(&mut rules, assignment)?;
            }
            planner.update_rules(rules)?;

            success(format!("Salary rules updated ({})", set.join(", ")));
            ttlog_soft(planner.store().conn(), "rules", "set", &set.join(", "));
        }

        if *print || (!*reset && set.is_empty()) {
            info("Current salary rules:");
            print_rules(planner.rules());
        }
    }

    Ok(())
}
