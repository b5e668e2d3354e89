//! Catalog and URL-state context for the Pokédex.
//!
//! Provides the catalog client to all components via use_context, and a
//! router-backed [`UrlState`] accessor for the selection parameter.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let catalog = use_catalog();
//! let mut url_state = use_url_state();
//! open_creature(&mut url_state, "Bulbasaur");
//! ```

use dioxus::prelude::*;
use pokedex_core::{CatalogClient, SearchParams, UrlState};

use crate::app::Route;

/// Shared catalog type for context.
///
/// `None` only when startup failed to configure a client.
pub type SharedCatalog = Option<CatalogClient>;

/// Get the catalog client configured at startup.
pub fn get_catalog() -> SharedCatalog {
    crate::get_catalog()
}

/// Hook to access the catalog client from context.
pub fn use_catalog() -> Signal<SharedCatalog> {
    use_context::<Signal<SharedCatalog>>()
}

/// [`UrlState`] over the Dioxus router.
///
/// Holds the route seen at render time; writing pushes the same route with
/// new query parameters, so the path never changes.
#[derive(Clone)]
pub struct RouterUrlState {
    route: Route,
    navigator: Navigator,
}

impl UrlState for RouterUrlState {
    fn search_params(&self) -> SearchParams {
        self.route.search_params()
    }

    fn set_search_params(&mut self, params: SearchParams) {
        let next = self.route.with_search_params(params);
        tracing::debug!(route = %next, "Navigating");
        self.navigator.push(next.clone());
        self.route = next;
    }
}

/// Hook returning a URL-state accessor for the current route.
pub fn use_url_state() -> RouterUrlState {
    RouterUrlState {
        route: use_route::<Route>(),
        navigator: use_navigator(),
    }
}
