//! Client configuration
//!
//! Holds the API key, API version, and base endpoint URL. The key is resolved
//! from the environment with an explicit fallback list; version and base URL
//! fall back to hardcoded defaults when unset.
//!
//! A `ClientConfig` is the only state shared between concurrent pagination
//! runs, so all access goes through a reader/writer lock. Share it with an
//! `Arc` and mutate through the setters.

use crate::error::{Error, Result};
use std::sync::{PoisonError, RwLock};

/// Environment variable consulted first when resolving the API key
pub const ENV_API_KEY: &str = "MARQUEE_API_KEY";

/// API version used when none is set explicitly
pub const DEFAULT_API_VERSION: &str = "1.0";

/// Base endpoint for the movie-listing API
pub const DEFAULT_BASE_URL: &str = "http://api.rottentomatoes.com/api/public";

#[derive(Debug, Default)]
struct ConfigInner {
    api_key: String,
    version: Option<String>,
    base_url: Option<String>,
}

/// Shared client configuration
///
/// Reads take a shared lock, writes an exclusive one; a poisoned lock falls
/// back to the inner value since the config holds no invariants that a
/// panicked writer could break.
#[derive(Debug, Default)]
pub struct ClientConfig {
    inner: RwLock<ConfigInner>,
}

impl ClientConfig {
    /// Create a config with the given API key (trimmed)
    pub fn new(api_key: impl Into<String>) -> Self {
        let config = Self::default();
        config.set_api_key(api_key);
        config
    }

    /// Resolve the API key from [`ENV_API_KEY`] or the fallback list
    ///
    /// The first value that is non-blank after trimming wins, the environment
    /// variable taking precedence. Fails with [`Error::EmptyApiKey`] when
    /// nothing resolves.
    pub fn from_env(fallbacks: &[&str]) -> Result<Self> {
        let key = env_or_default(ENV_API_KEY, fallbacks);
        if key.is_empty() {
            return Err(Error::EmptyApiKey);
        }
        Ok(Self::new(key))
    }

    /// Store the API key, trimming surrounding whitespace
    ///
    /// No format validation beyond that; blank keys are caught at start time.
    pub fn set_api_key(&self, key: impl Into<String>) {
        let key = key.into().trim().to_string();
        self.write().api_key = key;
    }

    /// Store the API version string, unvalidated
    pub fn set_api_version(&self, version: impl Into<String>) {
        self.write().version = Some(version.into());
    }

    /// Override the base endpoint URL
    pub fn set_base_url(&self, base_url: impl Into<String>) {
        self.write().base_url = Some(base_url.into());
    }

    /// The current API key (empty string when unset)
    pub fn api_key(&self) -> String {
        self.read().api_key.clone()
    }

    /// The API version, defaulting to [`DEFAULT_API_VERSION`]
    pub fn api_version(&self) -> String {
        self.read()
            .version
            .clone()
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string())
    }

    /// The base endpoint URL, defaulting to [`DEFAULT_BASE_URL`]
    pub fn base_url(&self) -> String {
        self.read()
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, ConfigInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, ConfigInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Resolve a value from an environment variable with explicit fallbacks
///
/// Trims every candidate; the first non-blank one wins.
fn env_or_default(var: &str, fallbacks: &[&str]) -> String {
    let from_env = std::env::var(var)
        .map(|v| v.trim().to_string())
        .unwrap_or_default();
    if !from_env.is_empty() {
        return from_env;
    }

    fallbacks
        .iter()
        .map(|f| f.trim())
        .find(|f| !f.is_empty())
        .unwrap_or_default()
        .to_string()
}
