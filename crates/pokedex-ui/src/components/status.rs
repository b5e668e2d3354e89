//! Status placeholders for asynchronous content.

use dioxus::prelude::*;

/// Shown while a request is in flight
#[component]
pub fn LoadingState(#[props(default = "Loading\u{2026}".to_string())] message: String) -> Element {
    rsx! {
        div { class: "loading-state", role: "status",
            div { class: "loading-spinner" }
            span { "{message}" }
        }
    }
}

/// Shown when a finished request produced nothing to display
#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div { class: "empty-state", "{message}" }
    }
}

/// Shown when a request failed
#[component]
pub fn ErrorState(message: String) -> Element {
    rsx! {
        div { class: "error-state", role: "alert", "\u{26A0} {message}" }
    }
}
