//! Property-based tests for client-side filtering
//!
//! Uses proptest to verify the search filter's invariants over arbitrary lists.

use proptest::prelude::*;
use pokedex_core::{filter_creatures, CreatureSummary, SearchQuery};

// ============================================================================
// Strategy Generators
// ============================================================================

fn creature_strategy() -> impl Strategy<Value = CreatureSummary> {
    (
        "[A-Za-z][a-z]{2,11}",
        "[0-9]{3}",
        prop::collection::vec("[A-Z][a-z]{3,8}", 1..3),
    )
        .prop_map(|(name, number, types)| CreatureSummary {
            id: format!("id-{}", number),
            number,
            name,
            types,
            image: String::new(),
        })
}

fn list_strategy() -> impl Strategy<Value = Vec<CreatureSummary>> {
    prop::collection::vec(creature_strategy(), 0..30)
}

/// A list plus an index into it (for picking a member)
fn list_with_member() -> impl Strategy<Value = (Vec<CreatureSummary>, usize)> {
    prop::collection::vec(creature_strategy(), 1..30).prop_flat_map(|list| {
        let len = list.len();
        (Just(list), 0..len)
    })
}

/// Any contiguous, non-empty substring of `s`
fn substring_of(s: String) -> impl Strategy<Value = String> {
    let len = s.len();
    (0..len)
        .prop_flat_map(move |start| (Just(start), start + 1..=len))
        .prop_map(move |(start, end)| s[start..end].to_string())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The empty query is the identity
    #[test]
    fn empty_query_is_identity(list in list_strategy()) {
        prop_assert_eq!(filter_creatures(&list, ""), list);
    }

    /// Filtering yields an order-preserving subsequence of the source
    #[test]
    fn result_is_ordered_subsequence(list in list_strategy(), query in "[a-z0-9]{0,3}") {
        let result = filter_creatures(&list, &query);
        let mut source = list.iter();
        for item in &result {
            prop_assert!(source.any(|c| c == item), "result out of source order");
        }
    }

    /// Any substring of a name selects that creature
    #[test]
    fn name_substring_finds_member(
        (list, index) in list_with_member(),
        seed in any::<prop::sample::Index>(),
    ) {
        let target = &list[index];
        let start = seed.index(target.name.len());
        let needle = &target.name[start..];
        let result = filter_creatures(&list, needle);
        prop_assert!(result.contains(target));
    }

    /// Any substring of a number selects that creature
    #[test]
    fn number_substring_finds_member(
        ((list, index), needle) in list_with_member()
            .prop_flat_map(|(list, index)| {
                let number = list[index].number.clone();
                (Just((list, index)), substring_of(number))
            }),
    ) {
        let result = filter_creatures(&list, &needle);
        prop_assert!(result.contains(&list[index]));
    }

    /// Every type tag selects its creature
    #[test]
    fn type_tag_finds_member((list, index) in list_with_member()) {
        let target = &list[index];
        for tag in &target.types {
            prop_assert!(filter_creatures(&list, tag).contains(target));
        }
    }

    /// Case never changes the result
    #[test]
    fn case_insensitive(list in list_strategy(), query in "[a-zA-Z]{1,4}") {
        prop_assert_eq!(
            filter_creatures(&list, &query.to_uppercase()),
            filter_creatures(&list, &query.to_lowercase())
        );
    }

    /// Filtering twice with the same query changes nothing more
    #[test]
    fn idempotent(list in list_strategy(), query in "[a-z0-9]{0,3}") {
        let once = filter_creatures(&list, &query);
        let twice = filter_creatures(&once, &query);
        prop_assert_eq!(once, twice);
    }

    /// Every returned item actually matches
    #[test]
    fn results_match(list in list_strategy(), query in "[a-z0-9 ]{0,4}") {
        let search = SearchQuery::new(&query);
        for item in search.apply(&list) {
            prop_assert!(search.matches(item));
        }
    }
}
