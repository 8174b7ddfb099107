pub mod clear;
pub mod config;
pub mod db;
pub mod diary;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod pattern;
pub mod rules;
pub mod salary;
pub mod shift;

use crate::config::Config;
use crate::core::planner::Planner;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;

/// Open the configured database and load the planner state from it.
pub(crate) fn open_planner(cfg: &Config) -> AppResult<Planner<SqliteStore>> {
    let store = SqliteStore::open(&cfg.database)?;
    Planner::load(store)
}
