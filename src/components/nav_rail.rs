//! Navigation Rail Component
//!
//! Narrow column on the left with one icon link per section. Collapses into
//! a top bar on small windows (see `.nav-rail` in the stylesheet).

use dioxus::prelude::*;
use pokedex_core::SearchParams;

use crate::app::Route;

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Home,
    List,
}

impl NavLocation {
    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Home => "Home",
            NavLocation::List => "List",
        }
    }

    /// Get the route for this location, carrying over `query`
    pub fn route(&self, query: SearchParams) -> Route {
        match self {
            NavLocation::Home => Route::Home { query },
            NavLocation::List => Route::ListPage { query },
        }
    }

    /// Which location a route belongs to; unmatched paths count as the list
    pub fn of(route: &Route) -> NavLocation {
        match route {
            Route::Home { .. } => NavLocation::Home,
            Route::ListPage { .. } | Route::Fallback { .. } => NavLocation::List,
        }
    }
}

/// Navigation Rail component
///
/// Links keep the current query string so an open detail dialog stays open
/// while switching sections.
#[component]
pub fn NavRail() -> Element {
    let route = use_route::<Route>();
    let current = NavLocation::of(&route);
    let query = route.search_params();

    let locations = [NavLocation::Home, NavLocation::List];

    rsx! {
        nav { class: "nav-rail", "aria-label": "Sections",
            span { class: "nav-logo", title: "Pok\u{e9}dex", "\u{25D3}" }
            for location in locations {
                Link {
                    to: location.route(query.clone()),
                    class: if location == current { "nav-link active" } else { "nav-link" },
                    span { class: "nav-link-icon", {render_nav_icon(location)} }
                    span { class: "nav-link-label", "{location.display_name()}" }
                }
            }
        }
    }
}

/// Inline SVG icon for a location
fn render_nav_icon(location: NavLocation) -> Element {
    match location {
        NavLocation::Home => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" }
                polyline { points: "9 22 9 12 15 12 15 22" }
            }
        },
        NavLocation::List => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                rect { x: "3", y: "3", width: "7", height: "7" }
                rect { x: "14", y: "3", width: "7", height: "7" }
                rect { x: "14", y: "14", width: "7", height: "7" }
                rect { x: "3", y: "14", width: "7", height: "7" }
            }
        },
    }
}
