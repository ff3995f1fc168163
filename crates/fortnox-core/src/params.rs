//! Ordered query parameters.

/// Reserved parameter naming the target service of a call.
pub const SERVICE_PARAM: &str = "service";

/// Service name of the token-issuance endpoint.
pub const ACCESS_TOKEN_SERVICE: &str = "AccessToken";

/// Query parameter carrying the requested page number.
pub const PAGE_PARAM: &str = "page";

/// Ordered list of query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing an existing value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        if let Some(slot) = self.pairs.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.pairs.push((key, value));
        }
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Remove a key, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.pairs.iter().position(|(k, _)| k == key)?;
        Some(self.pairs.remove(index).1)
    }

    /// Whether there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over `(key, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Strip the reserved `service` key if it names the token endpoint.
    ///
    /// Returns `true` when the call must use the token-issuance header set.
    /// Any other `service` value is left in place.
    pub fn take_access_token_marker(&mut self) -> bool {
        if self.get(SERVICE_PARAM) == Some(ACCESS_TOKEN_SERVICE) {
            self.remove(SERVICE_PARAM);
            true
        } else {
            false
        }
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl<K: Into<String>, V: ToString, const N: usize> From<[(K, V); N]> for QueryParams {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Into<String>, V: ToString> From<Vec<(K, V)>> for QueryParams {
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_in_place() {
        let mut params = QueryParams::from([("filter", "active"), ("sortby", "name")]);
        params.insert("filter", "all");
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("filter", "all"), ("sortby", "name")]);
    }

    #[test]
    fn access_token_marker_is_removed() {
        let mut params = QueryParams::new().with(SERVICE_PARAM, ACCESS_TOKEN_SERVICE);
        assert!(params.take_access_token_marker());
        assert!(params.is_empty());
    }

    #[test]
    fn other_service_values_are_kept() {
        let mut params = QueryParams::new().with(SERVICE_PARAM, "Customer");
        assert!(!params.take_access_token_marker());
        assert_eq!(params.get(SERVICE_PARAM), Some("Customer"));
    }

    #[test]
    fn page_numbers_render_as_text() {
        let params = QueryParams::new().with(PAGE_PARAM, 3);
        assert_eq!(params.get(PAGE_PARAM), Some("3"));
    }
}
