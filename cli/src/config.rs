//! Runtime configuration loaded from the environment (and `.env`).

use std::path::PathBuf;

use arena_client::ArenaConfig;

const DEFAULT_REDIRECT_SCHEME: &str = "arena";

/// Settings read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_scheme: String,
    pub data_dir: PathBuf,
    pub api_url: Option<String>,
    pub auth_url: Option<String>,
    pub strict_status: bool,
}

impl AppConfig {
    /// Load configuration from process environment variables.
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let g = |key: &str| -> String { lookup(key).unwrap_or_default() };
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Self {
            client_id: g("ARENA_CLIENT_ID"),
            client_secret: g("ARENA_CLIENT_SECRET"),
            redirect_scheme: non_empty("ARENA_REDIRECT_SCHEME")
                .unwrap_or_else(|| DEFAULT_REDIRECT_SCHEME.into()),
            data_dir: non_empty("ARENA_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(arena_db::data_dir),
            api_url: non_empty("ARENA_API_URL"),
            auth_url: non_empty("ARENA_AUTH_URL"),
            strict_status: g("ARENA_STRICT_STATUS") == "true",
        }
    }

    /// Names of settings the OAuth commands cannot run without.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.client_id.is_empty() {
            missing.push("ARENA_CLIENT_ID");
        }
        if self.client_secret.is_empty() {
            missing.push("ARENA_CLIENT_SECRET");
        }
        missing
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(arena_db::DB_FILE_NAME)
    }

    pub fn arena_config(&self) -> ArenaConfig {
        let mut config = ArenaConfig::new(
            self.client_id.clone(),
            self.client_secret.clone(),
            self.redirect_scheme.clone(),
        )
        .with_strict_status(self.strict_status);
        if let Some(url) = &self.api_url {
            config = config.with_api_base_url(url.clone());
        }
        if let Some(url) = &self.auth_url {
            config = config.with_auth_base_url(url.clone());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> AppConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = load(&[("ARENA_DATA_DIR", "/tmp/arena-test")]);
        assert_eq!(config.redirect_scheme, "arena");
        assert_eq!(config.db_path(), PathBuf::from("/tmp/arena-test/arena.db"));
        assert!(!config.strict_status);
        assert_eq!(
            config.missing_credentials(),
            vec!["ARENA_CLIENT_ID", "ARENA_CLIENT_SECRET"]
        );

        let arena = config.arena_config();
        assert_eq!(arena.api_base_url, "https://api.are.na");
        assert_eq!(arena.redirect_uri(), "arena://");
    }

    #[test]
    fn environment_overrides_apply() {
        let config = load(&[
            ("ARENA_CLIENT_ID", "id"),
            ("ARENA_CLIENT_SECRET", "secret"),
            ("ARENA_REDIRECT_SCHEME", "myapp"),
            ("ARENA_DATA_DIR", "/tmp/arena-test"),
            ("ARENA_API_URL", "http://localhost:9000"),
            ("ARENA_STRICT_STATUS", "true"),
        ]);
        assert!(config.missing_credentials().is_empty());

        let arena = config.arena_config();
        assert_eq!(arena.api_base_url, "http://localhost:9000");
        assert_eq!(arena.auth_base_url, "https://dev.are.na");
        assert_eq!(arena.redirect_uri(), "myapp://");
        assert!(arena.strict_status);
    }
}
