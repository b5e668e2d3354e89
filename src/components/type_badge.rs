//! Type Badge Component

use dioxus::prelude::*;
use pokedex_ui::Badge;

use crate::theme::colors::type_color;

/// Badge for one creature type, tinted with the type's color when known
#[component]
pub fn TypeBadge(tag: String) -> Element {
    match type_color(&tag) {
        Some(color) => rsx! {
            Badge { label: tag, accent: color.to_string() }
        },
        None => rsx! {
            Badge { label: tag }
        },
    }
}
