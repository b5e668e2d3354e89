//! Creature Dialog Component
//!
//! Always mounted by the shell. Open exactly while the URL carries a
//! non-empty `pokemon` parameter; closing removes that parameter and nothing
//! else.

use dioxus::prelude::*;
use pokedex_core::{
    close_creature, selected_creature, CreatureDetail, DetailKey, QueryState,
};
use pokedex_ui::{EmptyState, ErrorState, LoadingState, Modal};

use crate::context::use_url_state;
use crate::hooks::use_creature;

const FALLBACK_TITLE: &str = "Pok\u{e9}mon";

/// Detail overlay for the selected creature.
#[component]
pub fn CreatureDialog() -> Element {
    let url_state = use_url_state();
    let selected = selected_creature(&url_state);
    let state = use_creature(DetailKey::from_selection(selected.clone()));

    let close = move |_: ()| {
        let mut url_state = url_state.clone();
        close_creature(&mut url_state);
    };

    let title = dialog_title(&state);
    let body = match &state {
        QueryState::Idle | QueryState::Loading => rsx! { LoadingState {} },
        QueryState::Error(message) => rsx! {
            ErrorState { message: message.clone() }
        },
        QueryState::Success(None) => rsx! {
            EmptyState {
                message: format!(
                    "No Pok\u{e9}mon named \u{201C}{}\u{201D}.",
                    selected.clone().unwrap_or_default()
                )
            }
        },
        QueryState::Success(Some(creature)) => rsx! {
            CreatureDetailView { creature: creature.clone() }
        },
    };

    rsx! {
        Modal {
            open: selected.is_some(),
            title: title,
            on_close: close,
            {body}
        }
    }
}

/// Artwork beside a table of detail rows
#[component]
fn CreatureDetailView(creature: CreatureDetail) -> Element {
    let rows = detail_rows(&creature);

    rsx! {
        div { class: "detail-row",
            img {
                class: "detail-hero",
                src: "{creature.image}",
                alt: "{creature.name}",
            }
            dl { class: "detail-fields",
                for (label, value) in rows {
                    div { key: "{label}", class: "detail-kv",
                        dt { "{label}" }
                        dd { "{value}" }
                    }
                }
            }
        }
    }
}

/// Dialog heading: the creature's name once loaded.
fn dialog_title(state: &QueryState<Option<CreatureDetail>>) -> String {
    match state.data() {
        Some(Some(creature)) if !creature.name.is_empty() => creature.name.clone(),
        _ => FALLBACK_TITLE.to_string(),
    }
}

/// Label/value pairs in display order.
fn detail_rows(creature: &CreatureDetail) -> Vec<(&'static str, String)> {
    vec![
        ("Number", format!("#{}", creature.number)),
        ("Classification", creature.classification.clone()),
        ("Height", creature.height.to_string()),
        ("Weight", creature.weight.to_string()),
        ("Types", creature.types.join(", ")),
        ("Resistant", creature.resistant.join(", ")),
        ("Weaknesses", creature.weaknesses.join(", ")),
        ("Max HP", creature.max_hp.to_string()),
        ("Max CP", creature.max_cp.to_string()),
        ("Flee Rate", format!("{}%", creature.flee_percent())),
    ]
}
