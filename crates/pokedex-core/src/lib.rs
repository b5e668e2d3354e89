//! Pokédex Core Library
//!
//! Catalog access, client-side search and URL-driven selection for the
//! Pokédex browser.
//!
//! ## Overview
//!
//! The browser lists creatures fetched from a public GraphQL catalog, filters
//! them locally by free text, and shows a detail overlay for whichever
//! creature is named in the `pokemon` query parameter. The list and the
//! overlay never share in-memory state: both go through a [`UrlState`]
//! accessor.
//!
//! ## Quick Start
//!
//! ```ignore
//! use pokedex_core::{filter_creatures, CatalogClient, CatalogConfig, DetailKey};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CatalogClient::new(CatalogConfig::default())?;
//!
//!     let all = client.list_default().await?;
//!     for creature in filter_creatures(&all, "grass") {
//!         println!("#{} {}", creature.number, creature.name);
//!     }
//!
//!     if let Some(detail) = client.creature(&DetailKey::by_name("Bulbasaur")).await? {
//!         println!("{}: {}", detail.name, detail.classification);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod query;
pub mod search_params;
pub mod selection;
pub mod types;

// Re-exports
pub use client::CatalogClient;
pub use config::{CatalogConfig, DEFAULT_ENDPOINT, DEFAULT_LIST_LIMIT};
pub use error::{PokedexError, PokedexResult};
pub use filter::{filter_creatures, SearchQuery};
pub use query::{KeyedState, QueryState, RequestToken, RequestTracker};
pub use search_params::SearchParams;
pub use selection::{
    close_creature, open_creature, selected_creature, MemoryUrlState, UrlState, SELECTED_PARAM,
};
pub use types::*;
