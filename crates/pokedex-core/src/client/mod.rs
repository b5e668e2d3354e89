//! GraphQL catalog client.
//!
//! Two read-only operations: a bounded list of summaries and a single detail
//! record looked up by id or name. There is no retry and no response cache;
//! each call is one POST to the configured endpoint.

mod documents;
mod envelope;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::CatalogConfig;
use crate::error::{PokedexError, PokedexResult};
use crate::types::{CreatureDetail, CreatureSummary, DetailKey};

pub use documents::{CREATURE_DETAIL, DETAIL_OPERATION, LIST_CREATURES, LIST_OPERATION};
use envelope::{DetailData, GraphQlRequest, GraphQlResponse, ListData, ListVariables};

/// Cheaply cloneable handle to the catalog endpoint.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    config: Arc<CatalogConfig>,
}

impl CatalogClient {
    /// Build a client with the configured timeout.
    pub fn new(config: CatalogConfig) -> PokedexResult<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_http(http, config))
    }

    /// Use an existing HTTP client (shared pools, tests).
    pub fn with_http(http: reqwest::Client, config: CatalogConfig) -> Self {
        Self {
            http,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Fetch up to `first` summaries in catalog order.
    ///
    /// A `null` list from the endpoint is treated as empty.
    pub async fn list_creatures(&self, first: u32) -> PokedexResult<Vec<CreatureSummary>> {
        let data: ListData = self
            .execute(LIST_OPERATION, LIST_CREATURES, &ListVariables { first })
            .await?;
        let list = data.pokemons.unwrap_or_default();
        tracing::debug!(count = list.len(), first, "Fetched creature list");
        Ok(list)
    }

    /// Fetch the configured default page (`list_limit`, 151 unless overridden).
    pub async fn list_default(&self) -> PokedexResult<Vec<CreatureSummary>> {
        self.list_creatures(self.config.list_limit).await
    }

    /// Fetch one detail record; `Ok(None)` when the catalog has no match.
    ///
    /// An empty key is rejected before any request is made.
    pub async fn creature(&self, key: &DetailKey) -> PokedexResult<Option<CreatureDetail>> {
        if key.is_empty() {
            return Err(PokedexError::MissingDetailKey);
        }
        let data: DetailData = self.execute(DETAIL_OPERATION, CREATURE_DETAIL, key).await?;
        if data.pokemon.is_none() {
            tracing::debug!(?key, "No creature matched");
        }
        Ok(data.pokemon)
    }

    async fn execute<V, D>(
        &self,
        operation: &'static str,
        query: &'static str,
        variables: &V,
    ) -> PokedexResult<D>
    where
        V: Serialize,
        D: DeserializeOwned,
    {
        let body = GraphQlRequest {
            query,
            variables,
            operation_name: operation,
        };

        tracing::debug!(operation, endpoint = %self.config.endpoint, "Sending GraphQL query");

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(operation, status = status.as_u16(), "Catalog request failed");
            return Err(PokedexError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        let envelope: GraphQlResponse<D> = serde_json::from_slice(&bytes).inspect_err(|e| {
            tracing::warn!(operation, error = %e, "Undecodable catalog response");
        })?;
        envelope.into_result(operation).inspect_err(|e| {
            tracing::warn!(operation, error = %e, "GraphQL query returned errors");
        })
    }
}
