//! Theme: global stylesheet and type colors.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
