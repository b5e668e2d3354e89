//! Modal Dialog Frame
//!
//! Backdrop plus a titled panel. Clicking the backdrop, pressing Escape or
//! the close button all call `on_close`; the caller decides what closing
//! means.

use dioxus::prelude::*;

use super::CloseButton;

/// Properties for the Modal component
#[derive(Clone, PartialEq, Props)]
pub struct ModalProps {
    /// Whether the modal is rendered at all
    pub open: bool,
    /// Heading text
    pub title: String,
    /// Called on any close gesture
    pub on_close: EventHandler<()>,
    /// Panel body
    pub children: Element,
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Modal {
///         open: selected().is_some(),
///         title: "Pikachu".to_string(),
///         on_close: move |_| close(),
///         p { "details" }
///     }
/// }
/// ```
#[component]
pub fn Modal(props: ModalProps) -> Element {
    if !props.open {
        return rsx! {};
    }

    let on_close = props.on_close;

    rsx! {
        div {
            class: "modal-overlay",
            tabindex: "-1",
            // Focus the overlay; otherwise Escape goes to the card that opened it
            onmounted: move |evt: MountedEvent| async move {
                let _ = evt.set_focus(true).await;
            },
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if closes_modal(&evt.key()) {
                    on_close.call(());
                }
            },

            div {
                class: "modal-panel",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "{props.title}",
                onclick: move |e| e.stop_propagation(),

                header { class: "modal-header",
                    h2 { class: "modal-title", "{props.title}" }
                    CloseButton { onclick: move |_| on_close.call(()) }
                }

                div { class: "modal-content", {props.children} }
            }
        }
    }
}

/// Keys that dismiss an open modal.
pub(crate) fn closes_modal(key: &Key) -> bool {
    matches!(key, Key::Escape)
}
