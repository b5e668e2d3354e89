//! Ordered URL query parameters.
//!
//! Follows `application/x-www-form-urlencoded` rules: pairs keep their
//! insertion order, keys may repeat, `+` decodes to a space and spaces encode
//! back to `+`.

use std::fmt;

/// Parsed query string, the storage behind URL-driven UI state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pairs: Vec<(String, String)>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string, with or without its leading `?`.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Replace the first `key` in place and drop later duplicates; append if absent.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(first) => {
                self.pairs[first].1 = value;
                let mut index = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = index <= first || k != key;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    /// Add a pair without touching existing ones.
    pub fn append(&mut self, key: &str, value: impl Into<String>) {
        self.pairs.push((key.to_string(), value.into()));
    }

    /// Remove every pair stored under `key`, leaving the rest in order.
    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encoded form prefixed with `?`, or empty when there are no pairs.
    pub fn to_query_string(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("?{}", self)
        }
    }
}

impl fmt::Display for SearchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.pairs {
            serializer.append_pair(k, v);
        }
        f.write_str(&serializer.finish())
    }
}

impl<'a> From<&'a str> for SearchParams {
    fn from(query: &'a str) -> Self {
        Self::parse(query)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SearchParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_and_without_prefix() {
        assert_eq!(SearchParams::parse("?a=1&b=2"), SearchParams::parse("a=1&b=2"));
        assert_eq!(SearchParams::parse("a=1").get("a"), Some("1"));
    }

    #[test]
    fn test_parse_empty() {
        assert!(SearchParams::parse("").is_empty());
        assert!(SearchParams::parse("?").is_empty());
        assert_eq!(SearchParams::parse("").to_query_string(), "");
    }

    #[test]
    fn test_decoding() {
        let params = SearchParams::parse("pokemon=Mr.+Mime&tag=%C3%A9");
        assert_eq!(params.get("pokemon"), Some("Mr. Mime"));
        assert_eq!(params.get("tag"), Some("é"));
    }

    #[test]
    fn test_encoding() {
        let mut params = SearchParams::new();
        params.set("pokemon", "Mr. Mime");
        params.set("q", "a&b=c");
        assert_eq!(params.to_string(), "pokemon=Mr.+Mime&q=a%26b%3Dc");
    }

    #[test]
    fn test_set_appends_when_absent() {
        let mut params = SearchParams::parse("foo=bar");
        params.set("pokemon", "Bulbasaur");
        assert_eq!(params.to_query_string(), "?foo=bar&pokemon=Bulbasaur");
    }

    #[test]
    fn test_set_replaces_first_and_drops_duplicates() {
        let mut params = SearchParams::parse("a=1&pokemon=x&b=2&pokemon=y&c=3");
        params.set("pokemon", "z");
        assert_eq!(params.to_string(), "a=1&pokemon=z&b=2&c=3");
    }

    #[test]
    fn test_remove_keeps_others_in_order() {
        let mut params = SearchParams::parse("a=1&pokemon=x&b=2&pokemon=y");
        params.remove("pokemon");
        assert_eq!(params.to_string(), "a=1&b=2");
        assert!(!params.contains("pokemon"));
    }

    #[test]
    fn test_append_and_get_first() {
        let mut params = SearchParams::new();
        params.append("k", "1");
        params.append("k", "2");
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("k"), Some("1"));
    }

    #[test]
    fn test_from_iter() {
        let params: SearchParams = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(params.iter().collect::<Vec<_>>(), vec![("a", "1"), ("b", "2")]);
    }
}
