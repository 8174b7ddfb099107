use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::planner::Planner;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    else {
        return Ok(());
    };

    let pool = DbPool::new(&cfg.database)?;

    //
    // 1) MIGRATE (always: the other actions need the schema)
    //
    if *migrate {
        println!("{}▶ Running migrations…{}", CYAN, RESET);
    }
    let applied = init_db(&pool.conn)?;
    if *migrate {
        println!(
            "{}✔ Migration completed ({} applied).{}\n",
            GREEN, applied, RESET
        );
    }

    //
    // 2) INFO
    //
    if *info {
        stats::print_db_info(&pool.conn, &cfg.database)?;
    }

    //
    // 3) CHECK: SQLite integrity, then the planner documents
    //
    if *check {
        println!("{}▶ Running integrity check…{}", CYAN, RESET);

        let integrity: String = pool
            .conn
            .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

        if integrity == "ok" {
            println!("{}✔ Integrity check passed.{}", GREEN, RESET);
        } else {
            println!("{}✘ Integrity check failed:{} {}", RED, RESET, integrity);
        }

        let store = SqliteStore::open(&cfg.database)?;
        match Planner::load(store) {
            Ok(p) => println!(
                "{}✔ Stored documents readable:{} {} shifts, {} patterns, {} diary entries\n",
                GREEN,
                RESET,
                p.registry().shifts().len(),
                p.registry().pattern_groups().len(),
                p.diary().len()
            ),
            Err(e) => println!("{}✘ Stored documents:{} {}\n", RED, RESET, e),
        }
    }

    //
    // 4) VACUUM
    //
    if *vacuum {
        println!("{}▶ Running VACUUM…{}", CYAN, RESET);
        pool.conn.execute_batch("VACUUM;")?;
        println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
    }

    Ok(())
}
