//! Top-level API client
//!
//! Ties configuration, the HTTP transport, and the pagination engine
//! together behind the one operation this crate models: streaming the
//! upcoming-movies listing.

use crate::config::ClientConfig;
use crate::engine::{EngineConfig, PageStream, PaginationEngine};
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::query::{upcoming_movies_url, UpcomingQuery};
use std::sync::Arc;
use tracing::debug;

/// Client for the upcoming-movies listing API
///
/// Cheap to clone; clones share the configuration and the HTTP connection
/// pool. Each [`Client::upcoming_movies`] call runs its own independent
/// pagination loop.
#[derive(Debug, Clone)]
pub struct Client {
    config: Arc<ClientConfig>,
    http: HttpClient,
    engine_config: EngineConfig,
}

impl Client {
    /// Create a client over an existing configuration
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config: Arc::new(config),
            http: HttpClient::new(),
            engine_config: EngineConfig::default(),
        }
    }

    /// Create a client resolving the API key from the environment
    ///
    /// See [`ClientConfig::from_env`] for the resolution order. Fails with
    /// [`Error::EmptyApiKey`] when no candidate is non-blank.
    pub fn from_env(fallbacks: &[&str]) -> Result<Self> {
        Ok(Self::new(ClientConfig::from_env(fallbacks)?))
    }

    /// Replace the HTTP transport configuration
    #[must_use]
    pub fn with_http_config(mut self, config: HttpClientConfig) -> Self {
        self.http = HttpClient::with_config(config);
        self
    }

    /// Replace the engine configuration (cadence, cancellation behavior)
    #[must_use]
    pub fn with_engine_config(mut self, config: EngineConfig) -> Self {
        self.engine_config = config;
        self
    }

    /// The shared configuration, for key/version updates after construction
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Stream the upcoming-movies listing
    ///
    /// Fails synchronously, before any asynchronous work, when the config
    /// holds no API key or the page-1 URL cannot be constructed. Otherwise
    /// returns a lazy stream of pages; see [`PageStream`] for the
    /// termination contract.
    pub fn upcoming_movies(&self, query: Option<&UpcomingQuery>) -> Result<PageStream> {
        if self.config.api_key().is_empty() {
            return Err(Error::EmptyApiKey);
        }

        let url = upcoming_movies_url(&self.config, query)?;
        debug!(url = %url, "starting upcoming-movies stream");

        let cancel = query.and_then(|q| q.cancel.clone());
        let engine = PaginationEngine::new(self.http.clone()).with_config(self.engine_config.clone());
        Ok(engine.start(url, cancel))
    }
}
