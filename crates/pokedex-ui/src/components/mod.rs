//! Reusable UI components

mod badge;
mod button;
mod input;
mod modal;
mod status;

pub use badge::*;
pub use button::*;
pub use input::*;
pub use modal::*;
pub use status::*;
