//! Query parameter multimap

use std::collections::BTreeMap;
use url::{form_urlencoded, Url};

/// Query parameters with repeated keys.
///
/// Keys are kept sorted so encoded URLs are stable; values keep insertion
/// order per key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: BTreeMap<String, Vec<String>>,
}

impl QueryParams {
    /// Create an empty set of parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the parameters already present in a URL
    pub fn from_url(url: &Url) -> Self {
        url.query_pairs().collect()
    }

    /// Append a value, keeping existing values for the key
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.entry(key.into()).or_default().push(value.into());
    }

    /// Replace every value for the key with a single value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), vec![value.into()]);
    }

    /// Builder-style [`add`](Self::add)
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add(key, value);
        self
    }

    /// Remove a key and all of its values
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.values.remove(key)
    }

    /// First value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    /// All values for a key
    pub fn get_all(&self, key: &str) -> &[String] {
        self.values.get(key).map_or(&[][..], Vec::as_slice)
    }

    /// True when no parameter is set
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Append every value of `other`
    pub fn extend(&mut self, other: &QueryParams) {
        for (key, value) in other.iter() {
            self.add(key, value);
        }
    }

    /// Iterate over `(key, value)` pairs, keys sorted
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .flat_map(|(k, vs)| vs.iter().map(move |v| (k.as_str(), v.as_str())))
    }

    /// Append these pairs to the URL's query.
    ///
    /// Pairs already in the URL are left exactly as written.
    pub fn merge_into(&self, url: &mut Url) {
        if !self.is_empty() {
            url.query_pairs_mut().extend_pairs(self.iter());
        }
    }

    /// Replace every `key` pair in the URL's query with a single `key=value`,
    /// leaving the other pairs as written
    pub fn set_in_url(url: &mut Url, key: &str, value: &str) {
        let kept = url
            .query()
            .map(|query| {
                query
                    .split('&')
                    .filter(|pair| {
                        form_urlencoded::parse(pair.as_bytes())
                            .next()
                            .map_or(true, |(k, _)| k != key)
                    })
                    .collect::<Vec<_>>()
                    .join("&")
            })
            .filter(|query| !query.is_empty());

        url.set_query(kept.as_deref());
        url.query_pairs_mut().append_pair(key, value);
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.add(key, value);
        }
        params
    }
}
