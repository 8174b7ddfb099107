use crate::cli::commands::open_planner;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::errors::AppResult;
use crate::models::shift_date::ShiftDate;
use crate::models::shift_type::ShiftType;
use crate::ui::messages::{info, success};

/// Assign one day by hand.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Shift { date, shift } = cmd {
        let d = ShiftDate::parse(date)?;
        let s: ShiftType = shift.parse()?;

        let mut planner = open_planner(cfg)?;
        let previous = planner.registry().shift_on(&d);
        planner.set_shift(d, s)?;

        match previous {
            Some(p) if p != s => success(format!("{d}: {p} → {s}")),
            _ => success(format!("{d}: {s}")),
        }

        if let Some(g) = planner.find_pattern_group_for_date(&d) {
            info(format!(
                "{} lies inside pattern {} ({} → {}); the pattern record is unchanged.",
                d,
                g.short_id(),
                g.start_date,
                g.end_date
            ));
        }

        ttlog_soft(
            planner.store().conn(),
            "shift",
            &d.to_string(),
            &format!("Set {} to {}", d, s),
        );
    }

    Ok(())
}
