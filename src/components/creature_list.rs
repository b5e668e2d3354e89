//! Creature List component for the Pokédex.
//!
//! Search field over a grid of creature cards. The search text is local to
//! the list; activating a card writes the creature's name into the
//! `pokemon` query parameter, which is all the detail dialog listens to.

use dioxus::prelude::*;
use pokedex_core::{filter_creatures, open_creature, DEFAULT_LIST_LIMIT};
use pokedex_ui::{EmptyState, ErrorState, LoadingState, SearchInput};

use super::CreatureCard;
use crate::context::{use_catalog, use_url_state};
use crate::hooks::use_creatures;

pub const SEARCH_PLACEHOLDER: &str = "Search Pok\u{e9}mon by name, number or type";
pub const NO_RESULTS: &str = "No Pok\u{e9}mon found.";

/// Main list view.
///
/// Shows:
/// - Search input filtering by name, number or type
/// - Loading indicator while the list is fetched
/// - Grid of matching creatures
/// - Empty state when nothing matches, or the fetch error when it failed
#[component]
pub fn CreatureList() -> Element {
    let catalog = use_catalog();
    let limit = catalog
        .read()
        .as_ref()
        .map(|client| client.config().list_limit)
        .unwrap_or(DEFAULT_LIST_LIMIT);

    let creatures = use_creatures(limit);
    let mut query = use_signal(String::new);
    let url_state = use_url_state();

    let filtered = use_memo(move || {
        creatures
            .read()
            .data()
            .map(|list| filter_creatures(list, &query.read()))
            .unwrap_or_default()
    });

    let state = creatures.read();
    let loading = state.is_loading() || state.is_idle();
    let error = state.error().map(str::to_string);
    drop(state);

    rsx! {
        div { class: "creature-list",
            SearchInput {
                value: query(),
                oninput: move |value| query.set(value),
                placeholder: SEARCH_PLACEHOLDER.to_string(),
                aria_label: "Search Pok\u{e9}mon".to_string(),
            }

            if loading {
                LoadingState {}
            }

            div { class: "creature-grid",
                for creature in filtered() {
                    {
                        let url_state = url_state.clone();
                        let name = creature.name.clone();
                        rsx! {
                            CreatureCard {
                                key: "{creature.id}",
                                creature: creature.clone(),
                                on_open: move |_| {
                                    let mut url_state = url_state.clone();
                                    open_creature(&mut url_state, &name);
                                },
                            }
                        }
                    }
                }
            }

            if let Some(message) = error {
                ErrorState { message: format!("Could not load the catalog: {}", message) }
            } else if !loading && filtered.read().is_empty() {
                EmptyState { message: NO_RESULTS.to_string() }
            }
        }
    }
}
