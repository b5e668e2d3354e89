use dioxus::prelude::*;
use pokedex_core::SearchParams;

use crate::components::{CreatureDialog, NavRail};
use crate::context::{get_catalog, SharedCatalog};
use crate::pages::{Fallback, Home, ListPage};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Creature list
/// - `/list` - Creature list
/// - anything else - Creature list
///
/// Every route carries the full query string, where `pokemon=<name>` selects
/// the creature shown in the detail dialog.
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/?:..query")]
        Home { query: SearchParams },
        #[route("/list?:..query")]
        ListPage { query: SearchParams },
        #[route("/:..segments?:..query")]
        Fallback { segments: Vec<String>, query: SearchParams },
}

impl Route {
    /// Query parameters of this location.
    pub fn search_params(&self) -> SearchParams {
        match self {
            Route::Home { query } | Route::ListPage { query } | Route::Fallback { query, .. } => {
                query.clone()
            }
        }
    }

    /// Same path with `query` replacing the current parameters.
    pub fn with_search_params(&self, query: SearchParams) -> Route {
        match self {
            Route::Home { .. } => Route::Home { query },
            Route::ListPage { .. } => Route::ListPage { query },
            Route::Fallback { segments, .. } => Route::Fallback {
                segments: segments.clone(),
                query,
            },
        }
    }
}

/// Root application component.
///
/// Provides global styles, catalog context, and routing.
#[component]
pub fn App() -> Element {
    let catalog: Signal<SharedCatalog> = use_signal(|| {
        let catalog = get_catalog();
        if catalog.is_none() {
            tracing::error!("Catalog client not configured");
        }
        catalog
    });

    use_context_provider(|| catalog);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Layout shared by every route: navigation, routed page, and the
/// always-mounted detail dialog.
#[component]
fn Shell() -> Element {
    rsx! {
        div { class: "app-layout",
            NavRail {}
            main { class: "app-content",
                Outlet::<Route> {}
            }
            CreatureDialog {}
        }
    }
}
