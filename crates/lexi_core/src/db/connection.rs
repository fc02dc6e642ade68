//! Open the project DB with WAL and migrations.

use anyhow::{Context, Result};
use std::path::Path;

use super::layout;
use super::migrations;

/// Opens the DB at a given lexi dir (e.g. `~/.lexi` or `project_root/.lexi`).
/// Creates dirs if needed, enables WAL, runs migrations.
pub fn open_db_at(lexi_dir: &Path) -> Result<rusqlite::Connection> {
    let db_path = layout::ensure_lexi_dir_at(lexi_dir)?;
    let conn = rusqlite::Connection::open(&db_path).context("open lexi.db")?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA busy_timeout=5000;")?;
    migrations::run_all(&conn)?;
    Ok(conn)
}

/// Opens the project DB (creates `.lexi/logs` if needed), enables WAL, runs
/// migrations.
pub fn open_db(project_root: &Path) -> Result<rusqlite::Connection> {
    open_db_at(&project_root.join(".lexi"))
}
