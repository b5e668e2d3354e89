//! Pokédex UI Components
//!
//! Dioxus building blocks shared by the Pokédex pages: buttons, the search
//! field, status placeholders, type badges and the modal frame.
//!
//! Components only emit class names; the stylesheet lives with the app.

pub mod components;

pub use components::*;
