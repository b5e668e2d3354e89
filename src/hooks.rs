//! Data-fetching hooks.
//!
//! Each hook owns one signal and drives its [`QueryState`] through
//! `Idle -> Loading -> Success | Error`. Nothing refetches on its own; a new
//! request is issued only when the hook's input changes.

use dioxus::prelude::*;
use pokedex_core::{
    CreatureDetail, CreatureSummary, DetailKey, KeyedState, QueryState, RequestTracker,
};

use crate::context::use_catalog;

const NOT_CONFIGURED: &str = "Catalog client not initialized";

/// Fetch up to `limit` creature summaries.
pub fn use_creatures(limit: u32) -> Signal<QueryState<Vec<CreatureSummary>>> {
    let catalog = use_catalog();
    let mut state = use_signal(QueryState::default);

    use_effect(use_reactive!(|(limit,)| {
        let Some(client) = catalog() else {
            state.set(QueryState::Error(NOT_CONFIGURED.to_string()));
            return;
        };

        state.set(QueryState::Loading);
        spawn(async move {
            let result = client.list_creatures(limit).await;
            if let Err(ref e) = result {
                tracing::error!("Failed to load creature list: {}", e);
            }
            state.set(QueryState::from_result(result));
        });
    }));

    state
}

/// Fetch the detail record for `key`.
///
/// An empty key yields `Idle` and makes no request. Every key change
/// supersedes the previous request, so a slow response for an earlier key can
/// never replace the current one, and a result stored for an earlier key reads
/// as `Loading` until the new one arrives.
pub fn use_creature(key: DetailKey) -> QueryState<Option<CreatureDetail>> {
    let catalog = use_catalog();
    let tracker = use_hook(RequestTracker::new);
    let mut state = use_signal(KeyedState::<DetailKey, Option<CreatureDetail>>::default);
    let current = key.clone();

    use_effect(use_reactive!(|(key,)| {
        let token = tracker.issue();

        if key.is_empty() {
            state.set(KeyedState::new(key, QueryState::Idle));
            return;
        }

        let Some(client) = catalog() else {
            state.set(KeyedState::new(key, QueryState::Error(NOT_CONFIGURED.to_string())));
            return;
        };

        state.set(KeyedState::new(key.clone(), QueryState::Loading));
        let tracker = tracker.clone();
        spawn(async move {
            let result = client.creature(&key).await;
            if let Err(ref e) = result {
                tracing::warn!(?key, "Failed to load creature: {}", e);
            }
            let mut stored = state.write();
            tracker.apply(token, stored.state_mut(), result);
        });
    }));

    if current.is_empty() {
        return QueryState::Idle;
    }
    state.read().for_key(&current)
}
