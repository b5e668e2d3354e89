//! List pages - every route renders the creature list.
//!
//! The detail dialog is mounted by the shell, not by these pages, so it
//! stays open across route changes as long as the query keeps `pokemon`.

use dioxus::prelude::*;
use pokedex_core::SearchParams;

use crate::components::CreatureList;

/// `/`
#[component]
pub fn Home(query: SearchParams) -> Element {
    tracing::trace!(%query, "Rendering home");

    rsx! {
        CreatureList {}
    }
}

/// `/list`
#[component]
pub fn ListPage(query: SearchParams) -> Element {
    tracing::trace!(%query, "Rendering list");

    rsx! {
        CreatureList {}
    }
}

/// Any unmatched path falls back to the list.
#[component]
pub fn Fallback(segments: Vec<String>, query: SearchParams) -> Element {
    tracing::debug!(path = %segments.join("/"), %query, "Unmatched path, showing list");

    rsx! {
        CreatureList {}
    }
}
