//! Badge Component
//!
//! Small rounded tag, used for creature types.

use dioxus::prelude::*;

/// Rounded pill with optional accent color
///
/// `accent` becomes the CSS `--badge-accent` variable so the stylesheet
/// decides how the color is applied.
#[component]
pub fn Badge(
    /// Text shown in the pill
    label: String,
    /// Any CSS color
    #[props(default)]
    accent: Option<String>,
) -> Element {
    let style = accent
        .map(|color| format!("--badge-accent: {};", color))
        .unwrap_or_default();

    rsx! {
        span { class: "badge", style: "{style}", "{label}" }
    }
}
