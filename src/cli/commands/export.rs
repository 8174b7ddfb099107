use crate::cli::commands::open_planner;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::db::log::ttlog_soft;
use crate::errors::AppResult;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        force,
    } = cmd
    {
        let (year, m) = match month {
            Some(s) => date::parse_month(s)?,
            None => date::current_month(),
        };

        let planner = open_planner(cfg)?;
        let path = ExportLogic::export(&planner, *format, file, year, m, *force)?;

        ttlog_soft(
            planner.store().conn(),
            "export",
            format.as_str(),
            &format!("{}-{:02} → {}", year, m, path.display()),
        );
    }
    Ok(())
}
