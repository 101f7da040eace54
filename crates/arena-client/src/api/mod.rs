//! Are.na v2 REST API client.
//!
//! Provides typed access to the user and channel endpoints with automatic
//! Bearer token injection from the configured [`TokenStore`].

mod channels;
mod request;
mod search;
mod users;

pub mod models;


use std::sync::Arc;

pub use models::{
    Attachment, AvatarImage, BaseClass, Block, BlockClass, BlockEmbed, BlockImage,
    BlockImageData, BlockSource, Channel, ChannelContents, ChannelStatus, Channels, Direction,
    Metadata, Sort, User,
};
pub use request::build_url;

use url::Url;

use crate::auth;
use crate::storage::{DatabaseTokenStore, TokenStore};
use crate::transport::{ReqwestTransport, Transport};
use crate::{ArenaConfig, ArenaError};

/// First page of any paged endpoint.
pub const DEFAULT_PAGE: u32 = 1;

/// Are.na API client.
///
/// Construct one per application with [`ArenaClient::builder`] (or
/// [`ArenaClient::new`] for the persistent default store) and share it by
/// reference or `Arc`.
#[derive(Debug)]
pub struct ArenaClient {
    pub(crate) config: ArenaConfig,
    pub(crate) storage: Arc<dyn TokenStore>,
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) authorization_url: Url,
}

impl ArenaClient {
    /// Client with the database-backed token store in the default data
    /// directory and a reqwest transport.
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        Self::builder(config).build()
    }

    pub fn builder(config: ArenaConfig) -> ArenaClientBuilder {
        ArenaClientBuilder {
            config,
            storage: None,
            transport: None,
        }
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// URL to open in a browser or webview to start OAuth.
    pub fn authorization_url(&self) -> &Url {
        &self.authorization_url
    }
}

/// Builder for [`ArenaClient`].
#[derive(Debug)]
pub struct ArenaClientBuilder {
    config: ArenaConfig,
    storage: Option<Arc<dyn TokenStore>>,
    transport: Option<Arc<dyn Transport>>,
}

impl ArenaClientBuilder {
    /// Sets the token storage backend.
    #[must_use]
    pub fn storage(mut self, storage: impl TokenStore + 'static) -> Self {
        self.storage = Some(Arc::new(storage));
        self
    }

    /// Sets a shared token storage backend the caller keeps a handle to.
    #[must_use]
    pub fn shared_storage(mut self, storage: Arc<dyn TokenStore>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Sets the HTTP transport.
    #[must_use]
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Builds the client.
    ///
    /// Fails with [`ArenaError::InvalidUrl`] if the auth host is malformed,
    /// or [`ArenaError::Storage`] if no store was given and the default
    /// database cannot be opened.
    pub fn build(self) -> Result<ArenaClient, ArenaError> {
        let authorization_url = auth::authorization_url(&self.config)?;

        let storage = match self.storage {
            Some(storage) => storage,
            None => Arc::new(DatabaseTokenStore::open_default()?),
        };
        let transport = self
            .transport
            .unwrap_or_else(|| Arc::new(ReqwestTransport::new()));

        Ok(ArenaClient {
            config: self.config,
            storage,
            transport,
            authorization_url,
        })
    }
}
