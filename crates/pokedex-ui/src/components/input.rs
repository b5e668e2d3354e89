//! Search Input
//!
//! Full-width text field that reports every keystroke.

use dioxus::prelude::*;

/// Properties for the SearchInput component
#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    /// Current search value
    pub value: String,
    /// Handler called when search changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default = "search...".to_string())]
    pub placeholder: String,
    /// Accessible label; defaults to the placeholder
    #[props(default)]
    pub aria_label: Option<String>,
}

/// Controlled search field
///
/// # Example
///
/// ```rust,ignore
/// let mut query = use_signal(String::new);
///
/// rsx! {
///     SearchInput {
///         value: query(),
///         oninput: move |s| query.set(s),
///         placeholder: "Search Pokémon by name, number or type".to_string(),
///     }
/// }
/// ```
#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    let label = props
        .aria_label
        .clone()
        .unwrap_or_else(|| props.placeholder.clone());

    rsx! {
        input {
            class: "search-input",
            r#type: "search",
            placeholder: "{props.placeholder}",
            "aria-label": "{label}",
            value: "{props.value}",
            oninput: move |e| props.oninput.call(e.value()),
        }
    }
}
