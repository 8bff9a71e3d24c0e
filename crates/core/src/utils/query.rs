//! Query-string construction
//!
//! Filters coming from forms are mostly optional and often contain stray
//! whitespace. Absent values and values that are empty once trimmed are left
//! out entirely rather than sent as `key=`.

use url::form_urlencoded;

/// Ordered query parameters; setting an existing key replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` if `value` is present and not blank.
    #[must_use]
    pub fn set<V: ToString>(mut self, key: &'static str, value: Option<V>) -> Self {
        let Some(value) = value else {
            return self;
        };
        let value = value.to_string();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return self;
        }

        self.pairs.retain(|(existing, _)| *existing != key);
        self.pairs.push((key, trimmed.to_string()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    /// `""` when empty, otherwise `?k=v&...` (form-urlencoded).
    pub fn to_query_string(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }

        let mut serializer = form_urlencoded::Serializer::new(String::from("?"));
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }

    /// `path` followed by the encoded query string.
    pub fn append_to(&self, path: &str) -> String {
        format!("{path}{}", self.to_query_string())
    }
}
