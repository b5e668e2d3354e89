//! URL-driven selection state.
//!
//! The selected creature lives only in the `pokemon` query parameter. The
//! list and the detail overlay each hold their own [`UrlState`] accessor and
//! read or write that parameter independently, so the selection is
//! bookmarkable and neither component owns it.

use crate::search_params::SearchParams;

/// Query parameter carrying the selected creature's name.
pub const SELECTED_PARAM: &str = "pokemon";

/// Read/write access to the current location's query parameters.
pub trait UrlState {
    fn search_params(&self) -> SearchParams;

    /// Navigate to the same location with `params` as its query.
    fn set_search_params(&mut self, params: SearchParams);
}

/// Name of the selected creature, if the parameter is present and non-empty.
pub fn selected_creature(state: &impl UrlState) -> Option<String> {
    state
        .search_params()
        .get(SELECTED_PARAM)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

/// Select `name`, keeping every other parameter.
pub fn open_creature(state: &mut impl UrlState, name: &str) {
    let mut params = state.search_params();
    params.set(SELECTED_PARAM, name);
    tracing::debug!(creature = name, "Opening creature details");
    state.set_search_params(params);
}

/// Clear the selection, keeping every other parameter verbatim.
pub fn close_creature(state: &mut impl UrlState) {
    let mut params = state.search_params();
    if !params.contains(SELECTED_PARAM) {
        return;
    }
    params.remove(SELECTED_PARAM);
    tracing::debug!("Closing creature details");
    state.set_search_params(params);
}

/// In-memory accessor with a navigation history.
///
/// Used by the CLI and tests; the desktop app uses its router instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryUrlState {
    current: SearchParams,
    history: Vec<SearchParams>,
}

impl MemoryUrlState {
    /// Start at the given query string (`"?foo=bar"` or `"foo=bar"`).
    pub fn new(query: &str) -> Self {
        Self {
            current: SearchParams::parse(query),
            history: Vec::new(),
        }
    }

    /// Current query string including the leading `?` (empty when none).
    pub fn query_string(&self) -> String {
        self.current.to_query_string()
    }

    /// Number of navigations performed.
    pub fn navigations(&self) -> usize {
        self.history.len()
    }

    /// Return to the previous location, if any.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }
}

impl UrlState for MemoryUrlState {
    fn search_params(&self) -> SearchParams {
        self.current.clone()
    }

    fn set_search_params(&mut self, params: SearchParams) {
        let previous = std::mem::replace(&mut self.current, params);
        self.history.push(previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_preserves_other_params() {
        let mut state = MemoryUrlState::new("?foo=bar");
        open_creature(&mut state, "Bulbasaur");
        assert_eq!(state.query_string(), "?foo=bar&pokemon=Bulbasaur");
        assert_eq!(selected_creature(&state).as_deref(), Some("Bulbasaur"));
    }

    #[test]
    fn test_open_replaces_previous_selection() {
        let mut state = MemoryUrlState::new("?pokemon=Pikachu&foo=bar");
        open_creature(&mut state, "Bulbasaur");
        assert_eq!(state.query_string(), "?pokemon=Bulbasaur&foo=bar");
    }

    #[test]
    fn test_close_removes_only_selection() {
        let mut state = MemoryUrlState::new("?a=1&pokemon=Pikachu&b=two+words");
        close_creature(&mut state);
        assert_eq!(state.query_string(), "?a=1&b=two+words");
        assert_eq!(selected_creature(&state), None);
    }

    #[test]
    fn test_close_without_selection_does_not_navigate() {
        let mut state = MemoryUrlState::new("?a=1");
        close_creature(&mut state);
        assert_eq!(state.navigations(), 0);
    }

    #[test]
    fn test_empty_value_is_not_a_selection() {
        let state = MemoryUrlState::new("?pokemon=");
        assert_eq!(selected_creature(&state), None);
    }

    #[test]
    fn test_back_restores_previous_query() {
        let mut state = MemoryUrlState::new("");
        open_creature(&mut state, "Mew");
        assert!(state.back());
        assert_eq!(state.query_string(), "");
        assert!(!state.back());
    }
}
