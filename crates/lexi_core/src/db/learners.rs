//! Learner persistence in the project DB (learners table).

use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};
use rusqlite::params;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::open_db;

/// A registered learner.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Learner {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Store a learner name; returns the new row id.
pub fn add(project_root: &Path, name: &str) -> Result<i64> {
    let conn = open_db(project_root)?;
    conn.execute(
        "INSERT INTO learners (name, created_at) VALUES (?1, ?2)",
        params![name, Utc::now().timestamp()],
    )?;
    Ok(conn.last_insert_rowid())
}

/// List all learners, newest first.
pub fn list(project_root: &Path) -> Result<Vec<Learner>> {
    let conn = open_db(project_root)?;
    let mut stmt =
        conn.prepare("SELECT id, name, created_at FROM learners ORDER BY created_at DESC, id DESC")?;
    let rows = stmt.query_map([], |row| {
        let ts: i64 = row.get(2)?;
        Ok(Learner {
            id: row.get(0)?,
            name: row.get(1)?,
            created_at: Utc.timestamp_opt(ts, 0).single().unwrap_or_else(Utc::now),
        })
    })?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

/// Whether a learner with the given name exists.
pub fn exists(project_root: &Path, name: &str) -> Result<bool> {
    let conn = open_db(project_root)?;
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM learners WHERE name = ?1",
        params![name],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}
