use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::time::Duration;

/// Wait this long on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Prepare a connection for use: busy timeout plus every pending migration.
///
/// Returns how many migrations were applied.
pub fn init_db(conn: &Connection) -> AppResult<usize> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    let applied = run_pending_migrations(conn)?;
    Ok(applied)
}
