//! Bearer token persistence.
//!
//! [`TokenStore`] is the seam: the client only ever sees an optional secret
//! string. [`DatabaseTokenStore`] keeps it in `arena-db`, [`MemoryTokenStore`]
//! keeps it for the lifetime of the process.

use std::sync::RwLock;

use arena_db::Database;

/// Key under which the access token is stored.
pub const TOKEN_KEY: &str = "arena_access_token";

/// Get/set/clear access to a single bearer token.
///
/// Implementations synchronise internally so `set`/`clear` are atomic with
/// respect to concurrent `get` calls. No format validation is performed.
pub trait TokenStore: Send + Sync + std::fmt::Debug {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Token store backed by the `arena-db` key-value table.
#[derive(Debug, Clone)]
pub struct DatabaseTokenStore {
    db: Database,
    suite: String,
}

impl DatabaseTokenStore {
    /// Store in the default suite of `db`.
    pub fn new(db: Database) -> Self {
        Self::with_suite(db, "")
    }

    /// Store under a named suite, isolating it from other suites in `db`.
    pub fn with_suite(db: Database, suite: impl Into<String>) -> Self {
        Self {
            db,
            suite: suite.into(),
        }
    }

    /// Open the default database in the data directory.
    pub fn open_default() -> Result<Self, arena_db::DbError> {
        Ok(Self::new(Database::open_default()?))
    }
}

impl TokenStore for DatabaseTokenStore {
    fn get(&self) -> Option<String> {
        match self.db.get(&self.suite, TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, suite = %self.suite, "Failed to read access token");
                None
            }
        }
    }

    fn set(&self, token: &str) {
        if let Err(e) = self.db.set(&self.suite, TOKEN_KEY, token) {
            tracing::warn!(error = %e, suite = %self.suite, "Failed to persist access token");
        }
    }

    fn clear(&self) {
        if let Err(e) = self.db.delete(&self.suite, TOKEN_KEY) {
            tracing::warn!(error = %e, suite = %self.suite, "Failed to clear access token");
        }
    }
}

/// In-memory token store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl std::fmt::Debug for MemoryTokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = self.get().map(|_| "<redacted>");
        f.debug_struct("MemoryTokenStore")
            .field("token", &token)
            .finish()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        // A poisoned lock still holds a valid Option<String>.
        match self.token.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn set(&self, token: &str) {
        let mut guard = match self.token.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(token.to_string());
    }

    fn clear(&self) {
        let mut guard = match self.token.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_starts_empty() {
        let store = MemoryTokenStore::new();
        assert!(store.get().is_none());
    }

    #[test]
    fn memory_store_set_overwrite_clear() {
        let store = MemoryTokenStore::with_token("first");
        assert_eq!(store.get().as_deref(), Some("first"));

        store.set("second");
        assert_eq!(store.get().as_deref(), Some("second"));

        store.clear();
        assert!(store.get().is_none());
    }

    #[test]
    fn memory_store_debug_hides_token() {
        let store = MemoryTokenStore::with_token("secret-bearer");
        let printed = format!("{store:?}");
        assert!(printed.contains("<redacted>"));
        assert!(!printed.contains("secret-bearer"));
    }

    #[test]
    fn database_store_round_trip() {
        let db = Database::open_in_memory().unwrap();
        let store = DatabaseTokenStore::new(db.clone());
        assert!(store.get().is_none());

        store.set("abc");
        assert_eq!(store.get().as_deref(), Some("abc"));
        assert_eq!(db.get("", TOKEN_KEY).unwrap(), Some("abc".into()));

        store.clear();
        assert!(store.get().is_none());
    }

    #[test]
    fn database_store_suites_do_not_share_tokens() {
        let db = Database::open_in_memory().unwrap();
        let personal = DatabaseTokenStore::with_suite(db.clone(), "personal");
        let shared = DatabaseTokenStore::with_suite(db, "shared");

        personal.set("p-token");
        assert!(shared.get().is_none());

        shared.set("s-token");
        personal.clear();
        assert!(personal.get().is_none());
        assert_eq!(shared.get().as_deref(), Some("s-token"));
    }

    #[test]
    fn database_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(arena_db::DB_FILE_NAME);

        DatabaseTokenStore::new(Database::open(&path).unwrap()).set("persisted");

        let reopened = DatabaseTokenStore::new(Database::open(&path).unwrap());
        assert_eq!(reopened.get().as_deref(), Some("persisted"));
    }
}
