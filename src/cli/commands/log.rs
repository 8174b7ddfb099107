use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        // opening the store guarantees the log table exists
        let store = SqliteStore::open(&cfg.database)?;
        LogLogic::print_log(store.conn())?;
    }

    Ok(())
}
