//! Page components for the Pokédex.

mod list;

pub use list::{Fallback, Home, ListPage};
