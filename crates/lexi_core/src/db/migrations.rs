//! SQL schema for the project DB. Applied on open.

/// Stored learners: one row per registered learner name.
pub const LEARNERS: &str = "
CREATE TABLE IF NOT EXISTS learners (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    created_at INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_learners_name ON learners(name);
";

/// Run all migrations on an open connection.
pub fn run_all(conn: &rusqlite::Connection) -> anyhow::Result<()> {
    conn.execute_batch(LEARNERS)?;
    Ok(())
}
