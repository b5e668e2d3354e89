//! Creature Card Component
//!
//! One entry of the creature grid: artwork, number, name and type badges.
//! The whole card is a single button.

use dioxus::prelude::*;
use pokedex_core::CreatureSummary;
use pokedex_ui::CardButton;

use super::TypeBadge;

/// # Props
///
/// * `creature` - The summary to display
/// * `on_open` - Called when the card is activated
#[component]
pub fn CreatureCard(creature: CreatureSummary, on_open: EventHandler<()>) -> Element {
    rsx! {
        CardButton {
            class: "creature-card".to_string(),
            title: format!("Open {} details", creature.name),
            onclick: move |_| on_open.call(()),

            img {
                class: "creature-avatar",
                src: "{creature.image}",
                alt: "{creature.name}",
                loading: "lazy",
            }
            div { class: "creature-meta",
                div { class: "creature-title",
                    span { class: "creature-number", "#{creature.number}" }
                    span { class: "creature-name", "{creature.name}" }
                }
                div { class: "creature-types",
                    for tag in creature.types.iter() {
                        TypeBadge { key: "{tag}", tag: tag.clone() }
                    }
                }
            }
        }
    }
}
