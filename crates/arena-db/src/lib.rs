//! SQLite-backed key-value storage for the Are.na client.
//!
//! Holds small pieces of per-app state (currently the OAuth access token)
//! that must survive restarts.

pub mod kv;
pub mod schema;

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use rusqlite::Connection;

/// File name of the database inside the data directory.
pub const DB_FILE_NAME: &str = "arena.db";

/// Thread-safe database handle wrapping a single SQLite connection.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Open or create database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DbError> {
        let conn = Connection::open(path)?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.configure()?;
        db.migrate()?;
        Ok(db)
    }

    /// Open or create the database in [`data_dir`], creating the directory if needed.
    pub fn open_default() -> Result<Self, DbError> {
        let dir = data_dir();
        std::fs::create_dir_all(&dir)?;
        let path = dir.join(DB_FILE_NAME);
        tracing::debug!("Opening database at {}", path.display());
        Self::open(path)
    }

    /// Create an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, DbError> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.configure()?;
        db.migrate()?;
        Ok(db)
    }

    /// Access the underlying connection with a closure.
    pub fn with_conn<F, R>(&self, f: F) -> Result<R, DbError>
    where
        F: FnOnce(&Connection) -> Result<R, DbError>,
    {
        let conn = self.conn.lock().map_err(|_| DbError::LockPoisoned)?;
        f(&conn)
    }

    fn configure(&self) -> Result<(), DbError> {
        self.with_conn(|conn| {
            conn.execute_batch(
                "PRAGMA journal_mode=WAL;
                 PRAGMA busy_timeout=5000;",
            )?;
            Ok(())
        })
    }

    fn migrate(&self) -> Result<(), DbError> {
        self.with_conn(|conn| {
            schema::run_migrations(conn)?;
            Ok(())
        })
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database").finish_non_exhaustive()
    }
}

/// Determine the data directory for the application.
/// Priority: ARENA_DATA_DIR env var > ~/.arena
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("ARENA_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".arena")
}

/// Database error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database lock poisoned")]
    LockPoisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_migrate() {
        let db = Database::open_in_memory().expect("Failed to create test DB");
        assert_eq!(db.get("", "arena_access_token").unwrap(), None);
    }

    #[test]
    fn test_migrate_is_idempotent() {
        let db = Database::open_in_memory().unwrap();
        db.set("", "k", "v").unwrap();
        db.migrate().unwrap();
        assert_eq!(db.get("", "k").unwrap(), Some("v".into()));
    }

    #[test]
    fn test_file_database_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DB_FILE_NAME);

        {
            let db = Database::open(&path).unwrap();
            db.set("", "arena_access_token", "abc").unwrap();
        }

        let db = Database::open(&path).unwrap();
        assert_eq!(
            db.get("", "arena_access_token").unwrap(),
            Some("abc".into())
        );
    }
}
