//! Project SQLite DB under `.lexi/`.
//!
//! - `lexi.db` + WAL: stored learners.
//! - `logs/`: directory for log files.
//! - `env`: optional file for `source .lexi/env`.

mod connection;
mod layout;
mod learners;
mod migrations;

pub use connection::{open_db, open_db_at};
pub use layout::{ensure_lexi_dir, ensure_lexi_dir_at, ENV_FILE, LEXI_DB, LOGS_DIR};
pub use learners::{add as add_learner, exists as learner_exists, list as list_learners, Learner};
pub use migrations::run_all as run_migrations;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_lexi_dir_creates_layout() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let db_path = ensure_lexi_dir(root).unwrap();
        assert_eq!(db_path, root.join(".lexi").join(LEXI_DB));
        assert!(root.join(".lexi").is_dir());
        assert!(root.join(".lexi").join(LOGS_DIR).is_dir());
    }

    #[test]
    fn test_open_db_runs_migrations() {
        let dir = tempfile::tempdir().unwrap();
        let conn = open_db(dir.path()).unwrap();
        // learners table exists after open
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM learners", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
