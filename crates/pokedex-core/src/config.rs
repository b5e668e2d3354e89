//! Catalog endpoint configuration.

use std::time::Duration;

use crate::error::{PokedexError, PokedexResult};

/// Public GraphQL Pokémon catalog.
pub const DEFAULT_ENDPOINT: &str = "https://graphql-pokemon2.vercel.app/";

/// Size of the single bounded page requested by the list query.
pub const DEFAULT_LIST_LIMIT: u32 = 151;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and how to reach the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// GraphQL endpoint URL
    pub endpoint: String,
    /// `first` argument of the list query
    pub list_limit: u32,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            list_limit: DEFAULT_LIST_LIMIT,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl CatalogConfig {
    /// Defaults overridden by `POKEDEX_ENDPOINT`, `POKEDEX_LIST_LIMIT` and
    /// `POKEDEX_TIMEOUT_SECS` when set.
    pub fn from_env() -> PokedexResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> PokedexResult<Self> {
        let mut config = Self::default();

        if let Some(endpoint) = lookup("POKEDEX_ENDPOINT") {
            config = config.with_endpoint(endpoint)?;
        }
        if let Some(limit) = lookup("POKEDEX_LIST_LIMIT") {
            config.list_limit = limit
                .trim()
                .parse()
                .map_err(|_| PokedexError::Config(format!("POKEDEX_LIST_LIMIT={}", limit)))?;
        }
        if let Some(secs) = lookup("POKEDEX_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|_| PokedexError::Config(format!("POKEDEX_TIMEOUT_SECS={}", secs)))?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Replace the endpoint, rejecting anything that is not an http(s) URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> PokedexResult<Self> {
        let endpoint = endpoint.into();
        let trimmed = endpoint.trim();
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(PokedexError::Config(format!(
                "endpoint must be an http(s) URL: {}",
                endpoint
            )));
        }
        self.endpoint = trimmed.to_string();
        Ok(self)
    }

    pub fn with_list_limit(mut self, limit: u32) -> Self {
        self.list_limit = limit;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Defaults with only the values a caller actually resolved applied.
    ///
    /// Binaries resolve flags and their env fallbacks through clap and pass
    /// the results here, so nothing is read from the environment twice.
    pub fn from_overrides(
        endpoint: Option<String>,
        list_limit: Option<u32>,
        timeout_secs: Option<u64>,
    ) -> PokedexResult<Self> {
        let mut config = Self::default();
        if let Some(endpoint) = endpoint {
            config = config.with_endpoint(endpoint)?;
        }
        if let Some(limit) = list_limit {
            config = config.with_list_limit(limit);
        }
        if let Some(secs) = timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}
