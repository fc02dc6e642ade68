//! `.lexi/` directory layout.
//!
//! - `lexi.db` + WAL: project DB (stored learners).
//! - `logs/`: subdir for log files.
//! - `env`: optional env file loaded by the CLI.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Basename of the project DB (SQLite creates .db-wal and .db-shm alongside).
pub const LEXI_DB: &str = "lexi.db";
/// Env file under the lexi dir.
pub const ENV_FILE: &str = "env";
/// Subdir for log files.
pub const LOGS_DIR: &str = "logs";

/// Ensures `lexi_dir` and `lexi_dir/logs` exist; returns the path to lexi.db.
pub fn ensure_lexi_dir_at(lexi_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(lexi_dir).context("create lexi dir")?;
    std::fs::create_dir_all(lexi_dir.join(LOGS_DIR)).context("create logs dir")?;
    Ok(lexi_dir.join(LEXI_DB))
}

/// Ensures `.lexi` and `.lexi/logs` exist under the project root; returns
/// the path to lexi.db.
pub fn ensure_lexi_dir(project_root: &Path) -> Result<PathBuf> {
    ensure_lexi_dir_at(&project_root.join(".lexi"))
}
