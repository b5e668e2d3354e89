//! UI Components for the Pokédex.

mod creature_card;
mod creature_dialog;
mod creature_list;
mod nav_rail;
mod type_badge;

pub use creature_card::CreatureCard;
pub use creature_dialog::CreatureDialog;
pub use creature_list::CreatureList;
pub use nav_rail::{NavLocation, NavRail};
pub use type_badge::TypeBadge;
