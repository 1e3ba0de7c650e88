use std::fmt;

/// Ordered key/value pairs taken from a URL query string.
///
/// Keys may repeat. Lookups return the first match, and `set` follows the
/// browser `URLSearchParams` rules so the relative order of unrelated keys
/// never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a query string, with or without the leading `?`.
    ///
    /// Malformed input never fails: bad percent escapes are kept literally and
    /// pairs without `=` get an empty value.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = form_urlencoded::parse(query.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        Self { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Sets `key` to `value`.
    ///
    /// The first existing pair keeps its position and takes the new value;
    /// any later pairs with the same key are dropped. A new key is appended.
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

    /// Removes every pair with this key.
    pub fn delete(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serializes as `application/x-www-form-urlencoded`, without a leading `?`.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

// Lets the router build the query segment of a route.
impl From<&str> for QueryParams {
    fn from(query: &str) -> Self {
        Self::parse(query)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_order_and_decodes() {
        let params = QueryParams::parse("?page=2&query=red+lamp&sort=date%20desc");
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(
            pairs,
            vec![("page", "2"), ("query", "red lamp"), ("sort", "date desc")]
        );
    }

    #[test]
    fn test_parse_tolerates_malformed_input() {
        let params = QueryParams::parse("query=%zz&flag&=empty");
        assert_eq!(params.get("query"), Some("%zz"));
        assert_eq!(params.get("flag"), Some(""));
        assert_eq!(params.get(""), Some("empty"));
        assert!(QueryParams::parse("").is_empty());
        assert!(QueryParams::parse("?").is_empty());
    }

    #[test]
    fn test_get_returns_first_value() {
        let params = QueryParams::parse("query=a&query=b");
        assert_eq!(params.get("query"), Some("a"));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn test_set_replaces_in_place_and_drops_duplicates() {
        let mut params = QueryParams::parse("query=a&page=2&query=b&sort=asc");
        params.set("query", "books");
        assert_eq!(params.to_query_string(), "query=books&page=2&sort=asc");
    }

    #[test]
    fn test_set_appends_new_key() {
        let mut params = QueryParams::parse("page=2");
        params.set("query", "books");
        assert_eq!(params.to_query_string(), "page=2&query=books");
    }

    #[test]
    fn test_delete_removes_all_occurrences() {
        let mut params = QueryParams::parse("query=a&page=2&query=b");
        params.delete("query");
        assert_eq!(params.to_query_string(), "page=2");
        assert_eq!(params.get("query"), None);
    }

    #[test]
    fn test_serialization_escapes_reserved_characters() {
        let params: QueryParams = [("query", "tom & jerry"), ("q2", "a=b/c?")]
            .into_iter()
            .collect();
        assert_eq!(
            params.to_string(),
            "query=tom+%26+jerry&q2=a%3Db%2Fc%3F"
        );
    }

    #[test]
    fn test_from_str_matches_parse() {
        assert_eq!(QueryParams::from("a=1&b=2"), QueryParams::parse("?a=1&b=2"));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_reparse_is_identity(pairs in proptest::collection::vec((".{0,8}", ".{0,8}"), 0..6)) {
                let params: QueryParams = pairs.into_iter().collect();
                prop_assert_eq!(QueryParams::parse(&params.to_query_string()), params);
            }

            #[test]
            fn test_set_is_idempotent(query in "[a-z0-9=&]{0,20}", value in ".{0,10}") {
                let mut once = QueryParams::parse(&query);
                once.set("query", value.clone());
                let mut twice = once.clone();
                twice.set("query", value);
                prop_assert_eq!(once, twice);
            }
        }
    }
}
