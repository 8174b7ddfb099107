//! SQLite implementation of the planner persistence port.

use crate::core::store::{StateStore, StoreName};
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

/// Stores each planner document as one row of `kv_store`.
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Open the database at `path`, applying pending migrations.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::from_pool(DbPool::new(path)?)
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    /// Timestamp of the last save of `name`, if any.
    pub fn updated_at(&self, name: StoreName) -> AppResult<Option<String>> {
        let ts = self
            .pool
            .conn
            .query_row(
                "SELECT updated_at FROM kv_store WHERE name = ?1",
                [name.key()],
                |row| row.get(0),
            )
            .optional()?;
        Ok(ts)
    }
}

impl StateStore for SqliteStore {
    fn load(&mut self, name: StoreName) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE name = ?1",
                [name.key()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn save(&mut self, name: StoreName, json: &str) -> AppResult<()> {
        self.pool.conn.execute(
            "INSERT INTO kv_store (name, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(name) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![name.key(), json, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }
}
