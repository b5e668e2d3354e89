//! Per-query fetch state and stale-response protection.
//!
//! Each query moves `Idle -> Loading -> Success | Error` and stays there
//! until it is re-issued. Detail fetches additionally carry a
//! [`RequestToken`]; only the response for the newest token may be applied.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::PokedexResult;

/// Lifecycle of a single read query.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum QueryState<T> {
    /// Not issued (e.g. skipped for lack of a key)
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Response arrived
    Success(T),
    /// Request failed; message is user-presentable
    Error(String),
}

impl<T> QueryState<T> {
    /// Terminal state for a finished request.
    pub fn from_result(result: PokedexResult<T>) -> Self {
        match result {
            Ok(data) => QueryState::Success(data),
            Err(e) => QueryState::Error(e.to_string()),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, QueryState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            QueryState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// True once the request has finished, successfully or not.
    pub fn is_settled(&self) -> bool {
        matches!(self, QueryState::Success(_) | QueryState::Error(_))
    }
}

/// Query state tagged with the input it was produced for.
///
/// Reading it for a different input yields `Loading`, so a render that
/// happens between an input change and the refetch never shows the previous
/// input's result.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedState<K, T> {
    key: K,
    state: QueryState<T>,
}

impl<K: PartialEq, T: Clone> KeyedState<K, T> {
    pub fn new(key: K, state: QueryState<T>) -> Self {
        Self { key, state }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn state_mut(&mut self) -> &mut QueryState<T> {
        &mut self.state
    }

    /// State as seen by a reader whose current input is `key`.
    pub fn for_key(&self, key: &K) -> QueryState<T> {
        if self.key == *key {
            self.state.clone()
        } else {
            QueryState::Loading
        }
    }
}

impl<K: Default, T> Default for KeyedState<K, T> {
    fn default() -> Self {
        Self {
            key: K::default(),
            state: QueryState::Idle,
        }
    }
}

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// Hands out monotonically increasing tokens; only the newest is current.
///
/// Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    latest: Arc<AtomicU64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token for a new request, superseding every earlier one.
    pub fn issue(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `token` belongs to the most recently issued request.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }

    /// Invalidate outstanding requests without starting a new one.
    pub fn invalidate(&self) {
        self.issue();
    }

    /// Apply `response` to `state` only if `token` is still current.
    ///
    /// Returns whether the response was applied.
    pub fn apply<T>(
        &self,
        token: RequestToken,
        state: &mut QueryState<T>,
        response: PokedexResult<T>,
    ) -> bool {
        if !self.is_current(token) {
            tracing::debug!(?token, "Discarding stale response");
            return false;
        }
        *state = QueryState::from_result(response);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PokedexError;

    #[test]
    fn test_default_is_idle() {
        let state: QueryState<u8> = QueryState::default();
        assert!(state.is_idle());
        assert!(!state.is_settled());
    }

    #[test]
    fn test_from_result() {
        let ok: QueryState<u8> = QueryState::from_result(Ok(3));
        assert_eq!(ok.data(), Some(&3));
        assert!(ok.is_settled());

        let err: QueryState<u8> = QueryState::from_result(Err(PokedexError::Status(500)));
        assert_eq!(err.error(), Some("Endpoint returned status 500"));
        assert!(err.data().is_none());
    }

    #[test]
    fn test_newest_token_is_current() {
        let tracker = RequestTracker::new();
        let first = tracker.issue();
        assert!(tracker.is_current(first));

        let second = tracker.issue();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
        assert!(second > first);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let tracker = RequestTracker::new();
        let mut state = QueryState::Loading;

        let slow = tracker.issue();
        let fast = tracker.issue();

        assert!(tracker.apply(fast, &mut state, Ok("Bulbasaur")));
        assert!(!tracker.apply(slow, &mut state, Ok("Pikachu")));
        assert_eq!(state.data(), Some(&"Bulbasaur"));
    }

    #[test]
    fn test_invalidate_drops_in_flight() {
        let tracker = RequestTracker::new();
        let token = tracker.issue();
        tracker.invalidate();
        assert!(!tracker.is_current(token));
    }

    #[test]
    fn test_keyed_state_hides_result_for_other_key() {
        let state = KeyedState::new("Pikachu", QueryState::Success(25));
        assert_eq!(state.for_key(&"Pikachu"), QueryState::Success(25));
        assert_eq!(state.for_key(&"Bulbasaur"), QueryState::Loading);
    }

    #[test]
    fn test_keyed_state_applies_in_place() {
        let tracker = RequestTracker::new();
        let mut state = KeyedState::new("Mew", QueryState::Loading);
        let token = tracker.issue();

        assert!(tracker.apply(token, state.state_mut(), Ok(151)));
        assert_eq!(state.for_key(&"Mew"), QueryState::Success(151));
        assert_eq!(state.key(), &"Mew");
    }

    #[test]
    fn test_keyed_state_default_is_idle() {
        let state: KeyedState<String, u8> = KeyedState::default();
        assert!(state.for_key(&String::new()).is_idle());
    }

    #[test]
    fn test_clones_share_counter() {
        let tracker = RequestTracker::new();
        let other = tracker.clone();
        let token = tracker.issue();
        other.issue();
        assert!(!tracker.is_current(token));
    }
}
