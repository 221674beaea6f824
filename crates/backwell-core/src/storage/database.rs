//! SQLite-based progress storage.
//!
//! Provides persistent storage for:
//! - Completed challenge days
//! - A log of played day sessions
//! - Key-value store for application state (the serialized session
//!   player between CLI invocations, the subscription flag)

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, DatabaseError};
use crate::progress::ProgressStats;

use super::data_dir;

/// One completed playback session of a day program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySessionRecord {
    pub id: i64,
    pub session_id: String,
    pub day: u32,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub total_secs: u32,
}

/// SQLite database for challenge progress.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/backwell/backwell.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, CoreError> {
        let path = data_dir()?.join("backwell.db");
        Ok(Self::open_at(&path)?)
    }

    /// Open the database at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self, DatabaseError> {
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, DatabaseError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), DatabaseError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS completed_days (
                day          INTEGER PRIMARY KEY,
                completed_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS day_sessions (
                id           INTEGER PRIMARY KEY AUTOINCREMENT,
                session_id   TEXT NOT NULL,
                day          INTEGER NOT NULL,
                started_at   TEXT NOT NULL,
                completed_at TEXT NOT NULL,
                total_secs   INTEGER NOT NULL
            );

            CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_day_sessions_day ON day_sessions(day);
            ",
        )
        .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))
    }

    // ── Progress ─────────────────────────────────────────────────────

    /// Mark a day as completed. Idempotent; re-completing a day keeps
    /// the original completion timestamp.
    pub fn record_day_completed(&self, day: u32) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT OR IGNORE INTO completed_days (day, completed_at) VALUES (?1, ?2)",
            params![day, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Sorted list of completed day numbers.
    pub fn completed_days(&self) -> Result<Vec<u32>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare("SELECT day FROM completed_days ORDER BY day")?;
        let rows = stmt.query_map([], |row| row.get::<_, u32>(0))?;
        Ok(rows.collect::<Result<_, _>>()?)
    }

    pub fn is_day_completed(&self, day: u32) -> Result<bool, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare("SELECT 1 FROM completed_days WHERE day = ?1")?;
        Ok(stmt.exists(params![day])?)
    }

    pub fn progress_stats(&self) -> Result<ProgressStats, DatabaseError> {
        Ok(ProgressStats::from_completed(&self.completed_days()?))
    }

    /// Delete all progress and session history. The kv store is kept.
    pub fn reset_progress(&self) -> Result<(), DatabaseError> {
        self.conn.execute("DELETE FROM completed_days", [])?;
        self.conn.execute("DELETE FROM day_sessions", [])?;
        Ok(())
    }

    // ── Session log ──────────────────────────────────────────────────

    pub fn record_session(
        &self,
        session_id: &str,
        day: u32,
        started_at: DateTime<Utc>,
        total_secs: u32,
    ) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT INTO day_sessions (session_id, day, started_at, completed_at, total_secs)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                session_id,
                day,
                started_at.to_rfc3339(),
                Utc::now().to_rfc3339(),
                total_secs
            ],
        )?;
        Ok(())
    }

    pub fn sessions_for_day(&self, day: u32) -> Result<Vec<DaySessionRecord>, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, session_id, day, started_at, completed_at, total_secs
             FROM day_sessions WHERE day = ?1 ORDER BY completed_at",
        )?;
        let rows = stmt.query_map(params![day], |row| {
            let started: String = row.get(3)?;
            let completed: String = row.get(4)?;
            Ok(DaySessionRecord {
                id: row.get(0)?,
                session_id: row.get(1)?,
                day: row.get(2)?,
                started_at: started
                    .parse::<DateTime<Utc>>()
                    .unwrap_or_else(|_| Utc::now()),
                completed_at: completed
                    .parse::<DateTime<Utc>>()
                    .unwrap_or_else(|_| Utc::now()),
                total_secs: row.get(5)?,
            })
        })?;
        Ok(rows.collect::<Result<_, _>>()?)
    }

    // ── Key-value store ──────────────────────────────────────────────

    pub fn kv_get(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn kv_delete(&self, key: &str) -> Result<(), DatabaseError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }
}
