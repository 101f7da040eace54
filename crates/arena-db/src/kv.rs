//! Suite-scoped key-value store.
//!
//! A suite is a namespace inside one database; the empty string is the
//! default suite.

use crate::{Database, DbError};

impl Database {
    pub fn get(&self, suite: &str, key: &str) -> Result<Option<String>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT value FROM kv WHERE suite = ?1 AND key = ?2")?;
            let value = stmt
                .query_row([suite, key], |row| row.get::<_, String>(0))
                .optional()?;
            Ok(value)
        })
    }

    pub fn set(&self, suite: &str, key: &str, value: &str) -> Result<(), DbError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO kv (suite, key, value, updated_at) VALUES (?1, ?2, ?3, CURRENT_TIMESTAMP)
                 ON CONFLICT(suite, key) DO UPDATE SET value = ?3, updated_at = CURRENT_TIMESTAMP",
                rusqlite::params![suite, key, value],
            )?;
            Ok(())
        })
    }

    pub fn delete(&self, suite: &str, key: &str) -> Result<(), DbError> {
        self.with_conn(|conn| {
            conn.execute("DELETE FROM kv WHERE suite = ?1 AND key = ?2", [suite, key])?;
            Ok(())
        })
    }
}

trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>, rusqlite::Error>;
}

impl<T> OptionalExt<T> for Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>, rusqlite::Error> {
        match self {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
