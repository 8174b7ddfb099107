use crate::cli::commands::open_planner;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        let mut planner = open_planner(cfg)?;
        let shifts = planner.registry().shifts().len();
        let groups = planner.registry().pattern_groups().len();

        if !*yes
            && !confirm(&format!(
                "Delete ALL {} shifts and {} patterns? Diary entries are kept. This action is irreversible.",
                shifts, groups
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        planner.clear_shifts()?;

        success(format!("Removed {} shifts and {} patterns.", shifts, groups));
        ttlog_soft(
            planner.store().conn(),
            "clear",
            "",
            &format!("Removed {} shifts and {} patterns", shifts, groups),
        );
    }

    Ok(())
}
