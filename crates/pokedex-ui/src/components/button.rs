//! Button Components
//!
//! - Card: a whole list row that acts as one button
//! - Icon: compact square button for glyph actions (close, back)

use dioxus::prelude::*;

/// Properties for the CardButton component
#[derive(Clone, PartialEq, Props)]
pub struct CardButtonProps {
    /// Card content
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Tooltip text
    #[props(default)]
    pub title: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// A clickable card, used for list entries
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CardButton {
///         onclick: move |_| open(name.clone()),
///         title: "Open Pikachu details".to_string(),
///         span { "Pikachu" }
///     }
/// }
/// ```
#[component]
pub fn CardButton(props: CardButtonProps) -> Element {
    let full_class = with_extra_class("card-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            title: props.title.as_deref().unwrap_or(""),
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Icon button for compact actions (close, expand, etc.)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = with_extra_class("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "close".to_string(),
            class: "close-btn".to_string(),
            "\u{00D7}"
        }
    }
}

/// Append optional extra classes to a base class.
pub(crate) fn with_extra_class(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}
