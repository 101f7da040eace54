//! Client configuration.

/// Default host serving the v2 REST endpoints.
pub const API_BASE: &str = "https://api.are.na";

/// Default host serving the OAuth endpoints.
pub const AUTH_BASE: &str = "https://dev.are.na";

/// Construction-time configuration for [`crate::ArenaClient`].
///
/// Immutable once the client is built.
#[derive(Clone)]
pub struct ArenaConfig {
    pub client_id: String,
    pub client_secret: String,
    /// URL scheme used for OAuth callbacks (e.g. `"myapp"`).
    pub redirect_scheme: String,
    pub api_base_url: String,
    pub auth_base_url: String,
    /// Reject non-2xx responses before decoding. Off by default: the body is
    /// decoded whatever the status.
    pub strict_status: bool,
}

impl ArenaConfig {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_scheme: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_scheme: redirect_scheme.into(),
            api_base_url: API_BASE.to_string(),
            auth_base_url: AUTH_BASE.to_string(),
            strict_status: false,
        }
    }

    /// Override the API host (tests, proxies).
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Override the OAuth host (tests, proxies).
    #[must_use]
    pub fn with_auth_base_url(mut self, url: impl Into<String>) -> Self {
        self.auth_base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_strict_status(mut self, strict: bool) -> Self {
        self.strict_status = strict;
        self
    }

    /// Full redirect URI, e.g. `"myapp://"`.
    pub fn redirect_uri(&self) -> String {
        format!("{}://", self.redirect_scheme)
    }
}

impl std::fmt::Debug for ArenaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArenaConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_scheme", &self.redirect_scheme)
            .field("api_base_url", &self.api_base_url)
            .field("auth_base_url", &self.auth_base_url)
            .field("strict_status", &self.strict_status)
            .finish()
    }
}
