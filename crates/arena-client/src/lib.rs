//! Are.na API client library.
//!
//! Provides OAuth authorization-code exchange, pluggable bearer token
//! storage, and typed access to the Are.na v2 REST endpoints.

pub mod api;
pub mod auth;
pub mod config;
pub mod storage;
pub mod transport;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use api::{ArenaClient, ArenaClientBuilder, DEFAULT_PAGE};
pub use config::ArenaConfig;
pub use storage::{DatabaseTokenStore, MemoryTokenStore, TokenStore};
pub use transport::{ReqwestTransport, Transport, TransportRequest, TransportResponse};

/// Token data returned by the OAuth token endpoint.
///
/// Only `access_token` is persisted; the rest is handed back to the caller.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub scope: String,
    pub created_at: i64,
}

impl Token {
    /// `created_at` as a UTC timestamp, if it is in range.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created_at, 0)
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("scope", &self.scope)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Unified error type for the arena-client crate.
#[derive(Debug, thiserror::Error)]
pub enum ArenaError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP error (status {status:?}): {message}")]
    Http { status: Option<u16>, message: String },

    #[error("Failed to decode response: {0}")]
    Decoding(#[from] serde_json::Error),

    #[error("Token storage error: {0}")]
    Storage(#[from] arena_db::DbError),
}

impl From<url::ParseError> for ArenaError {
    fn from(e: url::ParseError) -> Self {
        ArenaError::InvalidUrl(e.to_string())
    }
}

impl From<reqwest::Error> for ArenaError {
    fn from(e: reqwest::Error) -> Self {
        ArenaError::Http {
            status: e.status().map(|s| s.as_u16()),
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_deserializes_from_token_endpoint_body() {
        let body = r#"{
            "access_token": "secret-token",
            "token_type": "bearer",
            "scope": "public",
            "created_at": 1700000000,
            "unused": true
        }"#;

        let token: Token = serde_json::from_str(body).unwrap();
        assert_eq!(token.access_token, "secret-token");
        assert_eq!(token.token_type, "bearer");
        assert_eq!(token.scope, "public");
        assert_eq!(token.created_at, 1_700_000_000);
        assert_eq!(
            token.created_at_utc().map(|t| t.to_rfc3339()),
            Some("2023-11-14T22:13:20+00:00".to_string())
        );
    }

    #[test]
    fn token_debug_hides_access_token() {
        let token = Token {
            access_token: "secret-token".into(),
            token_type: "bearer".into(),
            scope: "public".into(),
            created_at: 1,
        };
        let printed = format!("{token:?}");
        assert!(printed.contains("public"));
        assert!(!printed.contains("secret-token"));
    }

    #[test]
    fn url_parse_error_maps_to_invalid_url() {
        let err: ArenaError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, ArenaError::InvalidUrl(_)));
    }
}
