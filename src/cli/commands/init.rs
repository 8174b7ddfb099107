use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1️⃣ CONFIGURATION
    //
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing shiftplanner…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    //
    // 2️⃣ DATABASE (tables + migrations)
    //
    let conn = Connection::open(&db_path)?;
    let applied = init_db(&conn)?;

    println!(
        "✅ Database initialized at {} ({} migrations applied)",
        &db_path, applied
    );

    //
    // 3️⃣ INTERNAL LOG (non blocking)
    //
    log::ttlog_soft(
        &conn,
        "init",
        "",
        &format!("Database initialized at {}", &db_path),
    );

    println!("🎉 shiftplanner initialization completed!");
    Ok(())
}
