use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ordered schema migrations: (version, description, SQL).
///
/// A version is applied at most once; applied versions are recorded in the
/// `log` table with `operation = 'migration_applied'`.
const MIGRATIONS: &[(&str, &str, &str)] = &[
    (
        "20250301_0001_create_kv_store",
        "Created kv_store table for planner documents",
        r#"
        CREATE TABLE IF NOT EXISTS kv_store (
            name       TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    ),
    (
        "20250301_0002_log_operation_index",
        "Indexed log by operation",
        r#"
        CREATE INDEX IF NOT EXISTS idx_log_operation_target ON log(operation, target);
        "#,
    ),
];

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply_once(conn: &Connection, version: &str, description: &str, sql: &str) -> Result<bool> {
    // 1) already applied?
    if is_applied(conn, version)? {
        return Ok(false);
    }

    // 2) run it
    conn.execute_batch(sql)?;

    // 3) mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, description],
    )?;

    success(format!("Migration applied: {} → {}", version, description));
    Ok(true)
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for (version, description, sql) in MIGRATIONS {
        if apply_once(conn, version, description, sql)? {
            applied += 1;
        }
    }

    Ok(applied)
}
