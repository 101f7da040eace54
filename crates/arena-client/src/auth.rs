//! OAuth authorization-code flow for Are.na.
//!
//! Handles authorization URL generation, code exchange, and sign-out.
//! Are.na tokens do not expire and there is no refresh grant.

use reqwest::Method;
use url::Url;

use crate::api::{ArenaClient, build_url};
use crate::{ArenaConfig, ArenaError, Token};

/// Build the authorization URL for `config`.
///
/// Pure function of the configuration: identical configs yield identical URLs.
pub fn authorization_url(config: &ArenaConfig) -> Result<Url, ArenaError> {
    build_url(
        &config.auth_base_url,
        "/oauth/authorize",
        &[
            ("client_id", config.client_id.clone()),
            ("redirect_uri", config.redirect_uri()),
            ("response_type", "code".to_string()),
        ],
    )
}

impl ArenaClient {
    /// Exchange an authorization code for an access token and store it.
    ///
    /// On failure the stored token is left untouched.
    pub async fn exchange_code(&self, code: &str) -> Result<Token, ArenaError> {
        let params = [
            ("client_id", self.config.client_id.clone()),
            ("client_secret", self.config.client_secret.clone()),
            ("code", code.to_string()),
            ("grant_type", "authorization_code".to_string()),
            ("redirect_uri", self.config.redirect_uri()),
        ];

        let token: Token = self
            .execute(
                Some(self.config.auth_base_url.as_str()),
                "/oauth/token",
                Method::POST,
                &params,
            )
            .await?;

        self.storage.set(&token.access_token);
        tracing::info!(scope = %token.scope, "Signed in to Are.na");
        Ok(token)
    }

    /// Clear any stored token.
    pub fn sign_out(&self) {
        self.storage.clear();
        tracing::info!("Signed out of Are.na");
    }

    /// Whether a token is currently stored.
    pub fn is_signed_in(&self) -> bool {
        self.storage.get().is_some()
    }
}
