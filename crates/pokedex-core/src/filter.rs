//! Client-side search over a fetched creature list.
//!
//! A query matches a creature when its trimmed, lowercased text is a
//! substring of the lowercased name, number, or space-joined type tags.
//! Filtering always derives a new view; the source list is left untouched.

use crate::types::CreatureSummary;

/// Normalized free-text search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Normalize raw input (trim + lowercase).
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.trim().to_lowercase(),
        }
    }

    /// True when the query matches everything.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// The normalized text that is searched for.
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    pub fn matches(&self, creature: &CreatureSummary) -> bool {
        if self.is_empty() {
            return true;
        }

        creature.name.to_lowercase().contains(&self.needle)
            || creature.number.to_lowercase().contains(&self.needle)
            || creature.joined_types().to_lowercase().contains(&self.needle)
    }

    /// Ordered subsequence of `list` matching this query.
    pub fn apply<'a>(&self, list: &'a [CreatureSummary]) -> Vec<&'a CreatureSummary> {
        list.iter().filter(|c| self.matches(c)).collect()
    }
}

/// Owned filtered view, convenient for UI state that outlives the source borrow.
pub fn filter_creatures(list: &[CreatureSummary], query: &str) -> Vec<CreatureSummary> {
    SearchQuery::new(query)
        .apply(list)
        .into_iter()
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creature(name: &str, number: &str, types: &[&str]) -> CreatureSummary {
        CreatureSummary {
            id: format!("id-{}", number),
            number: number.to_string(),
            name: name.to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
            image: String::new(),
        }
    }

    fn sample() -> Vec<CreatureSummary> {
        vec![
            creature("Pikachu", "025", &["Electric"]),
            creature("Bulbasaur", "001", &["Grass", "Poison"]),
        ]
    }

    fn names(list: &[CreatureSummary]) -> Vec<&str> {
        list.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let list = sample();
        assert_eq!(filter_creatures(&list, ""), list);
        assert_eq!(filter_creatures(&list, "   "), list);
    }

    #[test]
    fn test_type_match() {
        let list = sample();
        assert_eq!(names(&filter_creatures(&list, "grass")), vec!["Bulbasaur"]);
    }

    #[test]
    fn test_number_match_keeps_order() {
        let list = sample();
        assert_eq!(
            names(&filter_creatures(&list, "0")),
            vec!["Pikachu", "Bulbasaur"]
        );
    }

    #[test]
    fn test_no_match() {
        assert!(filter_creatures(&sample(), "zzz").is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let list = sample();
        assert_eq!(
            filter_creatures(&list, "PIKA"),
            filter_creatures(&list, "pika")
        );
        assert_eq!(names(&filter_creatures(&list, "PIKA")), vec!["Pikachu"]);
    }

    #[test]
    fn test_query_spanning_joined_types() {
        let list = sample();
        assert_eq!(
            names(&filter_creatures(&list, "grass poi")),
            vec!["Bulbasaur"]
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let list = sample();
        assert_eq!(names(&filter_creatures(&list, "  bulba ")), vec!["Bulbasaur"]);
    }

    #[test]
    fn test_apply_borrows_source() {
        let list = sample();
        let view = SearchQuery::new("electric").apply(&list);
        assert_eq!(view.len(), 1);
        assert!(std::ptr::eq(view[0], &list[0]));
    }
}
